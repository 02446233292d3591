//! Cross-cutting error types for the OTC crates.
//!
//! Domain-specific errors (`ApiError`, `ConfigError`, `ReportError`) live in
//! their respective crates and converge as `anyhow::Error` in `otc-cli`.

use thiserror::Error;

/// Errors raised by core type conversions.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A status label is not one of the recognized categories.
    #[error("Unknown status category: {0}")]
    UnknownStatus(String),
}
