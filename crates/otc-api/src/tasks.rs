//! Endpoints and filter sets for the task and status-history queries.

use chrono::NaiveDate;
use otc_config::QueryConfig;

use crate::http::Filters;

pub const TASK_ENDPOINT: &str = "task/";
pub const STATUS_HISTORY_ENDPOINT: &str = "statushistory/";

/// Bulk listing of tasks planned for `date`.
#[must_use]
pub fn bulk_task_filters(date: NaiveDate, query: &QueryConfig) -> Filters {
    let mut filters = Filters::new()
        .with("plan_date_duration", date.format("%Y-%m-%d"))
        .with("project", query.project)
        .with("task_template", query.task_template);
    for step in &query.status_steps {
        filters = filters.with("status_step_name", step);
    }
    filters.with("limit", query.limit)
}

/// Detail lookup for one task.
#[must_use]
pub fn task_detail_filters(id: &str) -> Filters {
    Filters::new().with("id", id)
}

/// Status-change history of one task, limited to the status fields.
#[must_use]
pub fn status_history_filters(id: &str) -> Filters {
    Filters::new()
        .with("content_type__model", "task")
        .with("object_id", id)
        .with("status_field__in", "status,status_step")
}
