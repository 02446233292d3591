//! Work-order API connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default API root.
fn default_base_url() -> String {
    String::from("https://app.sytex.io/api")
}

/// Default per-request timeout.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// API root; endpoint paths are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Access token sent as `Authorization: Token <token>`.
    #[serde(default)]
    pub token: String,

    /// Organization scope sent in the `Organization` header.
    #[serde(default)]
    pub organization: String,

    /// Per-request timeout enforced by the HTTP client.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
            organization: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Check if the API config has the credentials every request needs.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty() && !self.organization.is_empty()
    }

    /// Fail with [`ConfigError::NotConfigured`] unless credentials are set.
    ///
    /// # Errors
    ///
    /// Returns an error when the token or organization is empty, or the
    /// base URL is not an `http(s)` URL.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "api".into(),
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        Ok(self)
    }
}
