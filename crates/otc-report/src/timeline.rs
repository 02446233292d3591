//! Declarative timeline data: one clipped interval per timestamped record,
//! an optional "now" marker, and axis ticks. Drawing is left to the renderer.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use otc_core::entities::Record;
use otc_core::enums::UNKNOWN_STATUS_COLOR;
use otc_core::sentinel;
use otc_core::time::{CLOCK_FORMAT, display_now, secondary_display};
use serde::Serialize;

/// Work window start, minutes after midnight (07:30).
pub const WINDOW_START_MINUTES: i64 = 7 * 60 + 30;

/// Work window end, minutes after midnight (17:00).
pub const WINDOW_END_MINUTES: i64 = 17 * 60;

/// Nominal width of every task bar.
pub const INTERVAL_MINUTES: i64 = 30;

/// Axis ticks, one every [`INTERVAL_MINUTES`] from window start.
pub const TICK_COUNT: i64 = 20;

/// The fixed daily window intervals are clipped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl WorkWindow {
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        let midnight = date.and_time(NaiveTime::MIN);
        Self {
            start: midnight + TimeDelta::minutes(WINDOW_START_MINUTES),
            end: midnight + TimeDelta::minutes(WINDOW_END_MINUTES),
        }
    }

    /// Inclusive on both ends.
    #[must_use]
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at <= self.end
    }

    /// Hours from window start to `at` (negative before the window).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn offset_hours(&self, at: NaiveDateTime) -> f64 {
        (at - self.start).num_seconds() as f64 / 3600.0
    }

    #[must_use]
    pub fn width_hours(&self) -> f64 {
        self.offset_hours(self.end)
    }

    /// Clip `[from, to)` to the window; `None` when nothing is left.
    #[must_use]
    pub fn clip(&self, from: NaiveDateTime, to: NaiveDateTime) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let shown_start = from.max(self.start);
        let shown_end = to.min(self.end);
        (shown_end > shown_start).then_some((shown_start, shown_end))
    }
}

/// Tooltip content for one interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverPayload {
    pub code: String,
    pub client: String,
    pub event: String,
    pub status: String,
    /// Primary display time, `HH:MM:SS`.
    pub primary_time: String,
    /// Primary time shifted by the secondary offset, `HH:MM:SS`.
    pub secondary_time: String,
    pub site: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interval {
    /// Row label, `<technician> - OTC <code>`.
    pub label: String,
    pub status: String,
    /// Hours from window start.
    pub start: f64,
    pub end: f64,
    pub color: &'static str,
    /// First interval of its status; renderers list it in the legend.
    pub show_in_legend: bool,
    pub hover: HoverPayload,
}

impl Interval {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NowMarker {
    pub offset: f64,
    #[serde(serialize_with = "serialize_clock")]
    pub at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub date: NaiveDate,
    pub window: WorkWindow,
    pub width_hours: f64,
    pub intervals: Vec<Interval>,
    pub now_marker: Option<NowMarker>,
    pub ticks: Vec<AxisTick>,
}

fn serialize_clock<S: serde::Serializer>(at: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&at.format(CLOCK_FORMAT))
}

/// Build the timeline for `date` as seen at instant `now`.
///
/// Records without a timestamp, and records whose bar falls entirely outside
/// the window, produce no interval. Intervals are ordered by task code.
#[must_use]
pub fn build_timeline(records: &[Record], date: NaiveDate, now: DateTime<Utc>) -> Timeline {
    let window = WorkWindow::for_date(date);

    let mut ordered: Vec<&Record> = records.iter().collect();
    ordered.sort_by(|a, b| a.code.cmp(&b.code));

    let mut legend_seen = HashSet::new();
    let intervals: Vec<Interval> = ordered
        .into_iter()
        .filter_map(|record| {
            let at = record.timestamp?;
            let (shown_start, shown_end) =
                window.clip(at, at + TimeDelta::minutes(INTERVAL_MINUTES))?;
            let status = record
                .status
                .clone()
                .unwrap_or_else(|| sentinel::UNKNOWN_STATUS.to_string());
            let show_in_legend = legend_seen.insert(status.clone());

            Some(Interval {
                label: format!("{} - OTC {}", record.technician, record.code),
                start: window.offset_hours(shown_start),
                end: window.offset_hours(shown_end),
                color: record
                    .category()
                    .map_or(UNKNOWN_STATUS_COLOR, |category| category.color()),
                show_in_legend,
                hover: HoverPayload {
                    code: record.code.clone(),
                    client: record.client.clone(),
                    event: record.event.clone(),
                    status: status.clone(),
                    primary_time: at.format(CLOCK_FORMAT).to_string(),
                    secondary_time: secondary_display(at).format(CLOCK_FORMAT).to_string(),
                    site: record.site.clone(),
                },
                status,
            })
        })
        .collect();

    let now = display_now(now);
    let now_marker = window.contains(now).then(|| NowMarker {
        offset: window.offset_hours(now),
        at: now,
    });

    tracing::debug!(
        records = records.len(),
        intervals = intervals.len(),
        now_visible = now_marker.is_some(),
        "built timeline"
    );

    Timeline {
        date,
        window,
        width_hours: window.width_hours(),
        intervals,
        now_marker,
        ticks: axis_ticks(&window),
    }
}

fn axis_ticks(window: &WorkWindow) -> Vec<AxisTick> {
    (0..TICK_COUNT)
        .map(|i| {
            let at = window.start + TimeDelta::minutes(INTERVAL_MINUTES * i);
            AxisTick {
                offset: window.offset_hours(at),
                label: at.format("%H:%M").to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        date().and_hms_opt(h, m, 0).unwrap()
    }

    fn record(code: &str, status: Option<&str>, ts: Option<NaiveDateTime>) -> Record {
        Record {
            code: code.into(),
            technician: "Ana Rojas".into(),
            status: status.map(str::to_string),
            timestamp: ts,
            client: "ACME".into(),
            event: "Visita".into(),
            site: "Centro".into(),
        }
    }

    /// 20:00 UTC is 15:00 display time, inside the window.
    fn afternoon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 2, 20, 0, 0).unwrap()
    }

    #[test]
    fn window_bounds() {
        let window = WorkWindow::for_date(date());
        assert_eq!(window.start, at(7, 30));
        assert_eq!(window.end, at(17, 0));
        assert!((window.width_hours() - 9.5).abs() < f64::EPSILON);
    }

    #[test]
    fn interval_inside_window() {
        let timeline = build_timeline(
            &[record("1", Some("Completada"), Some(at(10, 0)))],
            date(),
            afternoon(),
        );
        let interval = &timeline.intervals[0];
        assert!((interval.start - 2.5).abs() < 1e-9);
        assert!((interval.end - 3.0).abs() < 1e-9);
        assert_eq!(interval.color, "#32CD32");
        assert_eq!(interval.label, "Ana Rojas - OTC 1");
        assert_eq!(interval.hover.primary_time, "10:00:00");
        assert_eq!(interval.hover.secondary_time, "09:00:00");
    }

    #[rstest]
    #[case(at(18, 0))]
    #[case(at(17, 0))]
    #[case(at(6, 0))]
    #[case(at(7, 0))]
    fn intervals_outside_window_are_omitted(#[case] ts: NaiveDateTime) {
        let timeline = build_timeline(&[record("1", Some("Asignada"), Some(ts))], date(), afternoon());
        assert!(timeline.intervals.is_empty());
    }

    #[rstest]
    #[case(at(7, 15), 0.0, 0.25)]
    #[case(at(16, 45), 9.25, 9.5)]
    fn intervals_straddling_edges_are_clipped(
        #[case] ts: NaiveDateTime,
        #[case] start: f64,
        #[case] end: f64,
    ) {
        let timeline = build_timeline(&[record("1", Some("Asignada"), Some(ts))], date(), afternoon());
        let interval = &timeline.intervals[0];
        assert!((interval.start - start).abs() < 1e-9);
        assert!((interval.end - end).abs() < 1e-9);
        assert!(interval.width() > 0.0);
    }

    #[test]
    fn records_without_timestamp_are_skipped() {
        let timeline = build_timeline(&[record("1", Some("Asignada"), None)], date(), afternoon());
        assert!(timeline.intervals.is_empty());
    }

    #[test]
    fn unmapped_and_unknown_statuses_use_default_color() {
        let timeline = build_timeline(
            &[
                record("1", Some("Cancelada"), Some(at(9, 0))),
                record("2", None, Some(at(9, 0))),
            ],
            date(),
            afternoon(),
        );
        assert_eq!(timeline.intervals.len(), 2);
        assert!(timeline.intervals.iter().all(|i| i.color == UNKNOWN_STATUS_COLOR));
        assert_eq!(timeline.intervals[1].status, sentinel::UNKNOWN_STATUS);
    }

    #[test]
    fn ordered_by_code_with_legend_once_per_status() {
        let timeline = build_timeline(
            &[
                record("3", Some("Devuelta"), Some(at(9, 0))),
                record("1", Some("Devuelta"), Some(at(8, 0))),
                record("2", Some("Asignada"), Some(at(11, 0))),
            ],
            date(),
            afternoon(),
        );
        let codes: Vec<_> = timeline.intervals.iter().map(|i| i.hover.code.as_str()).collect();
        assert_eq!(codes, vec!["1", "2", "3"]);
        let legend: Vec<_> = timeline.intervals.iter().map(|i| i.show_in_legend).collect();
        assert_eq!(legend, vec![true, true, false]);
    }

    #[test]
    fn now_marker_inside_window() {
        let timeline = build_timeline(&[], date(), afternoon());
        let marker = timeline.now_marker.unwrap();
        assert_eq!(marker.at, at(15, 0));
        assert!((marker.offset - 7.5).abs() < 1e-9);
    }

    #[rstest]
    #[case(Utc.with_ymd_and_hms(2024, 5, 2, 23, 0, 0).unwrap())]
    #[case(Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap())]
    #[case(Utc.with_ymd_and_hms(2024, 5, 3, 20, 0, 0).unwrap())]
    fn no_marker_outside_window(#[case] now: DateTime<Utc>) {
        assert!(build_timeline(&[], date(), now).now_marker.is_none());
    }

    #[test]
    fn axis_has_twenty_half_hour_ticks() {
        let timeline = build_timeline(&[], date(), afternoon());
        assert_eq!(timeline.ticks.len(), 20);
        assert_eq!(timeline.ticks[0].label, "07:30");
        assert_eq!(timeline.ticks[19].label, "17:00");
        assert!((timeline.ticks[19].offset - 9.5).abs() < 1e-9);
    }
}
