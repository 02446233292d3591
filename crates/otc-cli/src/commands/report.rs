use anyhow::Context;
use chrono::Utc;
use otc_api::{ErrorLog, WorkOrderClient};
use otc_config::OtcConfig;
use otc_report::{RecordFilter, ReportOutcome, ReportView, generate_report};

use crate::cli::{GlobalFlags, OutputFormat, ReportArgs, ReportSection};
use crate::output::{self, report::SectionOutput};
use crate::progress::Progress;

/// Handle `otc report`.
pub async fn handle(
    args: &ReportArgs,
    config: &OtcConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let api = config
        .api
        .require()
        .context("set OTC_API__TOKEN and OTC_API__ORGANIZATION")?;

    let error_log = ErrorLog::new();
    let client = WorkOrderClient::new(api, config.query.clone())
        .context("failed to build work-order API client")?
        .with_error_log(error_log.clone());

    let spinner = Progress::spinner(&format!("Fetching OTC planned for {}", args.date));
    let outcome = match generate_report(&client, args.date, config.report.concurrency).await {
        Ok(outcome) => {
            spinner.finish_clear();
            outcome
        }
        Err(error) => {
            spinner.finish_err("report failed");
            for entry in error_log.entries() {
                tracing::debug!(%entry, "api error log");
            }
            return Err(error).with_context(|| format!("failed to build report for {}", args.date));
        }
    };

    let ReportOutcome::Records(set) = outcome else {
        if !flags.quiet {
            println!("No OTC planned for {}.", args.date);
        }
        return Ok(());
    };

    let filter = record_filter(args);
    let technicians = (!config.report.technicians.is_empty())
        .then_some(config.report.technicians.as_slice());
    let view = set.view(&filter, technicians, Utc::now());

    if view.records.is_empty() && !filter.is_empty() {
        tracing::warn!(
            date = %args.date,
            available = set.records.len(),
            "no records match the requested status/technician filter"
        );
    }

    print_view(&view, args.view, flags.format)
}

fn record_filter(args: &ReportArgs) -> RecordFilter {
    RecordFilter {
        statuses: (!args.statuses.is_empty()).then(|| {
            args.statuses
                .iter()
                .map(|category| category.label().to_string())
                .collect()
        }),
        technicians: (!args.technicians.is_empty()).then(|| args.technicians.clone()),
    }
}

fn print_view(view: &ReportView, section: ReportSection, format: OutputFormat) -> anyhow::Result<()> {
    output::output(&SectionOutput { view, section }, format)
}
