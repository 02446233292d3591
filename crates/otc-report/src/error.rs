//! Report generation error types.

use otc_api::ApiError;
use thiserror::Error;

/// Failures that abort report generation for a date. There is no partial
/// report: the first failure wins.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A remote call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The detail lookup for a listed task came back empty.
    #[error("detail query for task {id} returned no results")]
    MissingTaskDetail { id: String },
}
