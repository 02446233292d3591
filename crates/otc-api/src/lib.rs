//! # otc-api
//!
//! HTTP client for the remote work-order API.
//!
//! Every call is a single `GET` carrying a fixed header set (JSON content
//! negotiation, token authorization, organization scope). HTTP 200/201 bodies
//! are parsed as JSON; any other status, transport failure, or parse failure
//! is returned as an [`ApiError`] and appended to the optional [`ErrorLog`].
//! Nothing is retried.
//!
//! Three query shapes are used:
//! - bulk task listing for a plan date ([`WorkOrderClient::tasks_for_date`])
//! - task detail by id ([`WorkOrderClient::task_detail`])
//! - status history of one task ([`WorkOrderClient::status_history`])

mod diagnostics;
mod error;
mod http;
pub mod tasks;

pub use diagnostics::ErrorLog;
pub use error::ApiError;
pub use http::{Filters, build_url};

use std::future::Future;
use std::time::Duration;

use chrono::NaiveDate;
use otc_config::{ApiConfig, QueryConfig};
use otc_core::entities::{Collection, StatusChangeEvent, Task};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use crate::http::check_response;

/// The three lookups report generation needs from the remote system.
///
/// [`WorkOrderClient`] is the production implementation; tests substitute
/// in-memory gateways.
pub trait WorkOrderGateway: Sync {
    /// Tasks planned for `date`, restricted to the configured filters.
    fn tasks_for_date(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Collection<Task>, ApiError>> + Send;

    /// Full detail for one task.
    fn task_detail(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Collection<Task>, ApiError>> + Send;

    /// Status-change history for one task, in no particular order.
    fn status_history(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Collection<StatusChangeEvent>, ApiError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the work-order API.
#[derive(Debug, Clone)]
pub struct WorkOrderClient {
    http: reqwest::Client,
    base_url: String,
    query: QueryConfig,
    error_log: Option<ErrorLog>,
}

impl WorkOrderClient {
    /// Create a client carrying the fixed header set from `api`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unexpected`] if the token or organization cannot
    /// be used as a header value, or the HTTP client fails to build.
    pub fn new(api: &ApiConfig, query: QueryConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent("otc-timeline/0.1")
            .default_headers(default_headers(api)?)
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()
            .map_err(|e| ApiError::Unexpected(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: api.base_url.clone(),
            query,
            error_log: None,
        })
    }

    /// Also append every failure to `log`.
    #[must_use]
    pub fn with_error_log(mut self, log: ErrorLog) -> Self {
        self.error_log = Some(log);
        self
    }

    /// Issue one filtered `GET` against `endpoint` and parse the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a status other than
    /// 200/201, or a body that does not parse as `T`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        filters: &Filters,
    ) -> Result<T, ApiError> {
        let url = build_url(&self.base_url, endpoint, filters);
        tracing::debug!(%url, "work-order API request");

        let result = self.fetch_json(&url).await;
        if let Err(error) = &result {
            tracing::warn!(endpoint, %error, "work-order API call failed");
            if let Some(log) = &self.error_log {
                log.push(error.to_string());
            }
        }
        result
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;
        let resp = check_response(resp).await?;
        let body = resp.bytes().await.map_err(|e| ApiError::from_reqwest(&e))?;
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::Unexpected(format!("invalid JSON response: {e}")))
    }
}

fn default_headers(api: &ApiConfig) -> Result<HeaderMap, ApiError> {
    let value = |raw: &str| {
        HeaderValue::from_str(raw)
            .map_err(|e| ApiError::Unexpected(format!("invalid header value: {e}")))
    };

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, value(&format!("Token {}", api.token))?);
    headers.insert(
        HeaderName::from_static("organization"),
        value(&api.organization)?,
    );
    Ok(headers)
}

impl WorkOrderGateway for WorkOrderClient {
    async fn tasks_for_date(&self, date: NaiveDate) -> Result<Collection<Task>, ApiError> {
        self.query(tasks::TASK_ENDPOINT, &tasks::bulk_task_filters(date, &self.query))
            .await
    }

    async fn task_detail(&self, id: &str) -> Result<Collection<Task>, ApiError> {
        self.query(tasks::TASK_ENDPOINT, &tasks::task_detail_filters(id))
            .await
    }

    async fn status_history(&self, id: &str) -> Result<Collection<StatusChangeEvent>, ApiError> {
        self.query(
            tasks::STATUS_HISTORY_ENDPOINT,
            &tasks::status_history_filters(id),
        )
        .await
    }
}
