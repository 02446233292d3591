//! Report generation settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of in-flight per-task lookups.
const fn default_concurrency() -> usize {
    8
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Upper bound on concurrent per-task lookups.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Technicians to report on. Empty means every technician in the records.
    #[serde(default)]
    pub technicians: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            technicians: Vec::new(),
        }
    }
}

impl ReportConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `concurrency` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "report.concurrency".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
