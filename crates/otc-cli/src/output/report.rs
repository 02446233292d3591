//! Output of the daily report sections: titled tables, or the selected
//! section as JSON.

use otc_core::enums::StatusCategory;
use otc_core::sentinel;
use otc_core::time::DISPLAY_FORMAT;
use otc_report::ReportView;
use otc_report::aggregate::Summary;
use otc_report::timeline::Timeline;
use serde::{Serialize, Serializer};

use super::Tabular;
use super::table::{TableOptions, render_entity_table};
use crate::cli::ReportSection;

/// The selected section(s) of a report view, ready for any output format.
pub struct SectionOutput<'a> {
    pub view: &'a ReportView,
    pub section: ReportSection,
}

impl Serialize for SectionOutput<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.section {
            ReportSection::Records => self.view.records.serialize(serializer),
            ReportSection::Timeline => self.view.timeline.serialize(serializer),
            ReportSection::Summary => self.view.summary.serialize(serializer),
            ReportSection::All => self.view.serialize(serializer),
        }
    }
}

impl Tabular for SectionOutput<'_> {
    fn to_table(&self, options: TableOptions) -> String {
        render(self.view, self.section, options)
    }
}

/// Render the requested section(s) of `view` as titled plain-text tables.
#[must_use]
pub fn render(view: &ReportView, section: ReportSection, options: TableOptions) -> String {
    let blocks = match section {
        ReportSection::Records => vec![records(view, options)],
        ReportSection::Timeline => vec![timeline(&view.timeline, options)],
        ReportSection::Summary => vec![summary(&view.summary, options)],
        ReportSection::All => vec![
            records(view, options),
            timeline(&view.timeline, options),
            summary(&view.summary, options),
        ],
    };
    blocks.join("\n\n")
}

fn titled(title: &str, body: &str) -> String {
    format!("{title}\n\n{body}")
}

fn records(view: &ReportView, options: TableOptions) -> String {
    let headers = [
        "code",
        "technician",
        "status",
        "timestamp",
        "client",
        "event",
        "site",
    ];
    let rows = view
        .records
        .iter()
        .map(|record| {
            vec![
                record.code.clone(),
                record.technician.clone(),
                record
                    .status
                    .clone()
                    .unwrap_or_else(|| sentinel::UNKNOWN_STATUS.to_string()),
                record.timestamp.map_or_else(
                    || String::from("-"),
                    |at| at.format(DISPLAY_FORMAT).to_string(),
                ),
                record.client.clone(),
                record.event.clone(),
                record.site.clone(),
            ]
        })
        .collect::<Vec<_>>();

    titled(
        &format!("OTC records ({})", rows.len()),
        &render_entity_table(&headers, &rows, options),
    )
}

fn timeline(timeline: &Timeline, options: TableOptions) -> String {
    let title = format!(
        "Timeline {} ({} - {})",
        timeline.date,
        timeline.window.start.format("%H:%M"),
        timeline.window.end.format("%H:%M"),
    );

    let now = timeline.now_marker.as_ref().map_or_else(
        || String::from("now: outside work window"),
        |marker| {
            format!(
                "now: {} (+{:.2}h)",
                marker.at.format("%H:%M:%S"),
                marker.offset
            )
        },
    );

    if timeline.intervals.is_empty() {
        return format!("{title}\n\n(no intervals)\n{now}");
    }

    let headers = ["task", "status", "time", "secondary", "from_h", "to_h"];
    let rows = timeline
        .intervals
        .iter()
        .map(|interval| {
            vec![
                interval.label.clone(),
                interval.status.clone(),
                interval.hover.primary_time.clone(),
                interval.hover.secondary_time.clone(),
                format!("{:.2}", interval.start),
                format!("{:.2}", interval.end),
            ]
        })
        .collect::<Vec<_>>();

    format!(
        "{}\n{now}",
        titled(&title, &render_entity_table(&headers, &rows, options))
    )
}

fn summary(summary: &Summary, options: TableOptions) -> String {
    let headings = StatusCategory::ALL
        .iter()
        .map(|category| category.heading())
        .collect::<Vec<_>>();

    let status_row = vec![
        StatusCategory::ALL
            .iter()
            .map(|category| summary.by_status.get(*category).to_string())
            .collect::<Vec<_>>(),
    ];
    let by_status = render_entity_table(&headings, &status_row, options);

    let mut technician_headers = vec!["Técnico"];
    technician_headers.extend(headings.iter().copied());
    technician_headers.push("Total");
    let technician_rows = summary
        .by_technician
        .iter()
        .map(|row| {
            let mut cells = vec![row.technician.clone()];
            cells.extend(
                StatusCategory::ALL
                    .iter()
                    .map(|category| row.counts.get(*category).to_string()),
            );
            cells.push(row.total.to_string());
            cells
        })
        .collect::<Vec<_>>();
    let by_technician = render_entity_table(&technician_headers, &technician_rows, options);

    let overdue_headers = ["Estado", "A tiempo", "Vencidas", "Total"];
    let overdue_rows = summary
        .overdue
        .iter()
        .map(|row| {
            vec![
                row.category.heading().to_string(),
                row.on_time.to_string(),
                row.overdue.to_string(),
                row.total.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    let overdue = render_entity_table(&overdue_headers, &overdue_rows, options);

    [
        format!("Total OTC: {}", summary.total),
        titled("By status", &by_status),
        titled("By technician", &by_technician),
        titled(
            &format!(
                "Overdue (evaluated {})",
                summary.evaluated_at.format(DISPLAY_FORMAT)
            ),
            &overdue,
        ),
    ]
    .join("\n\n")
}
