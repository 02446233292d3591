use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use otc_core::enums::StatusCategory;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate the daily report for a plan date.
    Report(ReportArgs),
    /// Show the effective configuration (token redacted).
    Config,
}

/// Which part of the report to print.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ReportSection {
    Records,
    Timeline,
    Summary,
    #[default]
    All,
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Plan date (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: NaiveDate,

    /// Only include tasks in these statuses (repeatable), e.g. "en camino".
    #[arg(short, long = "status", value_name = "STATUS")]
    pub statuses: Vec<StatusCategory>,

    /// Only include tasks of these technicians (repeatable).
    #[arg(short, long = "technician", value_name = "NAME")]
    pub technicians: Vec<String>,

    /// Part of the report to print.
    #[arg(long, value_enum, default_value_t = ReportSection::All)]
    pub view: ReportSection,
}
