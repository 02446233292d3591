//! Shared HTTP helpers: URL construction and response status checks.

use serde_json::Value;

use crate::error::ApiError;

/// Ordered query-string filters. Keys may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters(Vec<(String, String)>);

impl Filters {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Join an API root, an endpoint path, and percent-encoded filters.
#[must_use]
pub fn build_url(base_url: &str, endpoint: &str, filters: &Filters) -> String {
    let mut url = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    );
    if !filters.is_empty() {
        let query = filters
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&query);
    }
    url
}

/// Accept 200 and 201; anything else becomes [`ApiError::ServerRejected`]
/// carrying the response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status().as_u16();
    if matches!(status, 200 | 201) {
        return Ok(resp);
    }
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::TransportFailure(format!("failed to read response body: {e}")))?;
    let payload = serde_json::from_str(&text).unwrap_or(Value::String(text));
    Err(ApiError::ServerRejected { status, payload })
}
