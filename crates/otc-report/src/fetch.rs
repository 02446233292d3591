//! Concurrent per-task fan-out with ordered fan-in.
//!
//! For every task id the detail and the status history are requested
//! together; up to `concurrency` ids are in flight at once. Results come back
//! in input order regardless of completion order, so position `i` of the
//! output always belongs to `ids[i]`. The first failure aborts the run and
//! drops every lookup still in flight.

use futures::{StreamExt, TryStreamExt, stream};
use otc_api::{ApiError, WorkOrderGateway};
use otc_core::entities::{Collection, Record, StatusChangeEvent, Task};

use crate::assemble::assemble_record;
use crate::error::ReportError;
use crate::resolver::resolve_status;

/// Raw payloads fetched for one task id.
#[derive(Debug, Clone)]
pub struct TaskBundle {
    pub id: String,
    pub detail: Collection<Task>,
    pub history: Collection<StatusChangeEvent>,
}

impl TaskBundle {
    /// Resolve the status and assemble the record for this task.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingTaskDetail`] if the detail lookup
    /// returned no task.
    pub fn into_record(self) -> Result<Record, ReportError> {
        let task = self
            .detail
            .results
            .first()
            .ok_or(ReportError::MissingTaskDetail { id: self.id })?;
        let status = resolve_status(&self.history.results);
        Ok(assemble_record(task, &status))
    }
}

/// Fetch detail and history for every id, preserving input order.
///
/// # Errors
///
/// Returns the first [`ApiError`] encountered; no partial result is kept.
pub async fn fetch_bundles<G: WorkOrderGateway>(
    gateway: &G,
    ids: &[String],
    concurrency: usize,
) -> Result<Vec<TaskBundle>, ApiError> {
    let concurrency = concurrency.max(1);
    tracing::debug!(tasks = ids.len(), concurrency, "fetching task detail and history");

    stream::iter(ids)
        .map(|id| async move {
            let (detail, history) =
                futures::try_join!(gateway.task_detail(id), gateway.status_history(id))?;
            Ok::<_, ApiError>(TaskBundle {
                id: id.clone(),
                detail,
                history,
            })
        })
        .buffered(concurrency)
        .try_collect()
        .await
}
