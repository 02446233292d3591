//! # otc-report
//!
//! Builds the daily OTC report for one plan date:
//!
//! 1. bulk task query for the date (empty → [`ReportOutcome::NoData`])
//! 2. concurrent detail + status-history lookups per task ([`fetch`])
//! 3. current-status resolution per task ([`resolver`])
//! 4. one normalized [`Record`] per task ([`assemble`])
//!
//! The record set then feeds the [`timeline`] builder and the [`aggregate`]
//! summaries independently. Only step 2 is concurrent; everything after it
//! is a pure transformation of already-fetched data.

pub mod aggregate;
pub mod assemble;
pub mod fetch;
pub mod filter;
pub mod resolver;
pub mod timeline;

mod error;

pub use error::ReportError;
pub use filter::RecordFilter;

use chrono::{DateTime, NaiveDate, Utc};
use otc_api::WorkOrderGateway;
use otc_core::entities::Record;
use serde::Serialize;

use crate::aggregate::Summary;
use crate::timeline::Timeline;

/// Records for one plan date, one per listed task, in listing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSet {
    pub date: NaiveDate,
    pub records: Vec<Record>,
}

/// Result of a successful report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    Records(RecordSet),
    /// The bulk query matched no tasks for the date.
    NoData,
}

/// Everything a renderer needs for one filtered view of a record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub records: Vec<Record>,
    pub timeline: Timeline,
    pub summary: Summary,
}

/// Fetch and assemble the record set for `date`.
///
/// # Errors
///
/// Returns [`ReportError`] on the first failed remote call or empty task
/// detail. No partial record set is ever returned.
pub async fn generate_report<G: WorkOrderGateway>(
    gateway: &G,
    date: NaiveDate,
    concurrency: usize,
) -> Result<ReportOutcome, ReportError> {
    let listing = gateway.tasks_for_date(date).await?;
    if listing.is_empty() {
        tracing::info!(%date, "no tasks planned for date");
        return Ok(ReportOutcome::NoData);
    }

    let ids: Vec<String> = listing.results.into_iter().map(|task| task.id).collect();
    tracing::info!(%date, tasks = ids.len(), "generating report");

    let records = fetch::fetch_bundles(gateway, &ids, concurrency)
        .await?
        .into_iter()
        .map(fetch::TaskBundle::into_record)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(%date, records = records.len(), "report generated");
    Ok(ReportOutcome::Records(RecordSet { date, records }))
}

impl RecordSet {
    /// Sorted, de-duplicated technician names.
    #[must_use]
    pub fn technicians(&self) -> Vec<String> {
        aggregate::technicians(&self.records)
    }

    /// Apply `filter`, then build the timeline and summaries at instant `now`.
    ///
    /// `technicians` selects the per-technician rows; `None` reports on every
    /// technician left after filtering.
    #[must_use]
    pub fn view(
        &self,
        filter: &RecordFilter,
        technicians: Option<&[String]>,
        now: DateTime<Utc>,
    ) -> ReportView {
        let records = filter.apply(&self.records);
        let technicians =
            technicians.map_or_else(|| aggregate::technicians(&records), <[String]>::to_vec);
        ReportView {
            timeline: timeline::build_timeline(&records, self.date, now),
            summary: aggregate::summarize(&records, &technicians, now),
            records,
        }
    }
}
