//! Summary counts over a record set: totals, per-status, per-technician and
//! the on-time/overdue split.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use otc_core::entities::Record;
use otc_core::enums::StatusCategory;
use otc_core::time::display_now;
use serde::Serialize;

/// A record is overdue once its status is older than this.
pub const OVERDUE_THRESHOLD_HOURS: i64 = 42;

/// Whether a status set at `timestamp` is overdue at display time `now`.
/// Records without a timestamp are never overdue.
#[must_use]
pub fn is_overdue(timestamp: Option<NaiveDateTime>, now: NaiveDateTime) -> bool {
    timestamp.is_some_and(|at| now - at > TimeDelta::hours(OVERDUE_THRESHOLD_HOURS))
}

/// Count per recognized status category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub assigned: usize,
    pub en_route: usize,
    pub in_progress: usize,
    pub returned: usize,
    pub completed: usize,
    pub open: usize,
}

impl CategoryCounts {
    fn slot(&mut self, category: StatusCategory) -> &mut usize {
        match category {
            StatusCategory::Assigned => &mut self.assigned,
            StatusCategory::EnRoute => &mut self.en_route,
            StatusCategory::InProgress => &mut self.in_progress,
            StatusCategory::Returned => &mut self.returned,
            StatusCategory::Completed => &mut self.completed,
            StatusCategory::Open => &mut self.open,
        }
    }

    #[must_use]
    pub const fn get(&self, category: StatusCategory) -> usize {
        match category {
            StatusCategory::Assigned => self.assigned,
            StatusCategory::EnRoute => self.en_route,
            StatusCategory::InProgress => self.in_progress,
            StatusCategory::Returned => self.returned,
            StatusCategory::Completed => self.completed,
            StatusCategory::Open => self.open,
        }
    }

    /// Sum over every category; unrecognized labels are not included.
    #[must_use]
    pub fn sum(&self) -> usize {
        StatusCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }

    fn tally<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut counts = Self::default();
        for category in records.into_iter().filter_map(Record::category) {
            *counts.slot(category) += 1;
        }
        counts
    }
}

/// One row of the per-technician breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnicianRow {
    pub technician: String,
    #[serde(flatten)]
    pub counts: CategoryCounts,
    /// Every record of the technician, recognized status or not.
    pub total: usize,
}

/// Same-day vs. overdue split for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverdueRow {
    pub category: StatusCategory,
    pub on_time: usize,
    pub overdue: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub by_status: CategoryCounts,
    pub by_technician: Vec<TechnicianRow>,
    pub overdue: Vec<OverdueRow>,
    /// Display time the overdue split was evaluated at.
    pub evaluated_at: NaiveDateTime,
}

/// Sorted, de-duplicated technician names present in `records`.
#[must_use]
pub fn technicians(records: &[Record]) -> Vec<String> {
    let mut names: Vec<String> = records.iter().map(|r| r.technician.clone()).collect();
    names.sort();
    names.dedup();
    names
}

/// Per-technician rows, in the order `technicians` lists them.
#[must_use]
pub fn technician_breakdown(records: &[Record], technicians: &[String]) -> Vec<TechnicianRow> {
    technicians
        .iter()
        .map(|technician| {
            let own: Vec<&Record> = records
                .iter()
                .filter(|r| &r.technician == technician)
                .collect();
            TechnicianRow {
                technician: technician.clone(),
                counts: CategoryCounts::tally(own.iter().copied()),
                total: own.len(),
            }
        })
        .collect()
}

/// On-time/overdue split for the tracked categories at display time `now`.
#[must_use]
pub fn overdue_split(records: &[Record], now: NaiveDateTime) -> Vec<OverdueRow> {
    StatusCategory::OVERDUE_TRACKED
        .into_iter()
        .map(|category| {
            let (overdue, on_time): (Vec<&Record>, Vec<&Record>) = records
                .iter()
                .filter(|r| r.category() == Some(category))
                .partition(|r| is_overdue(r.timestamp, now));
            OverdueRow {
                category,
                on_time: on_time.len(),
                overdue: overdue.len(),
                total: on_time.len() + overdue.len(),
            }
        })
        .collect()
}

/// Compute every summary table for `records` as seen at instant `now`.
#[must_use]
pub fn summarize(records: &[Record], technicians: &[String], now: DateTime<Utc>) -> Summary {
    let evaluated_at = display_now(now);
    Summary {
        total: records.len(),
        by_status: CategoryCounts::tally(records),
        by_technician: technician_breakdown(records, technicians),
        overdue: overdue_split(records, evaluated_at),
        evaluated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn at(day: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn record(tech: &str, status: Option<&str>, ts: Option<NaiveDateTime>) -> Record {
        Record {
            code: format!("{tech}-{status:?}"),
            technician: tech.into(),
            status: status.map(str::to_string),
            timestamp: ts,
            client: "ACME".into(),
            event: "Visita".into(),
            site: "Centro".into(),
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record("Ana", Some("Completada"), Some(at(2, 10))),
            record("Ana", Some("Completada"), Some(at(1, 8))),
            record("Ana", Some("Devuelta"), Some(at(2, 9))),
            record("Luis", Some("Asignada"), None),
            record("Luis", Some("Asignada"), Some(at(1, 9))),
            record("Luis", Some("Cancelada"), Some(at(2, 11))),
            record("Sin asignar", None, None),
            record("Luis", Some("en camino"), Some(at(2, 12))),
        ]
    }

    /// 2024-05-03 04:00 display time.
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 3, 9, 0, 0).unwrap()
    }

    #[rstest]
    #[case(Some(at(1, 10)), at(3, 4), false)]
    #[case(Some(at(1, 10)), at(3, 5), true)]
    #[case(Some(at(1, 9)), at(3, 4), true)]
    #[case(None, at(9, 0), false)]
    fn overdue_threshold_is_strict(
        #[case] ts: Option<NaiveDateTime>,
        #[case] now: NaiveDateTime,
        #[case] expected: bool,
    ) {
        assert_eq!(is_overdue(ts, now), expected);
    }

    #[test]
    fn totals_and_status_counts() {
        let summary = summarize(&sample(), &technicians(&sample()), now());
        assert_eq!(summary.total, 8);
        assert_eq!(
            summary.by_status,
            CategoryCounts {
                assigned: 2,
                en_route: 1,
                in_progress: 0,
                returned: 1,
                completed: 2,
                open: 0,
            }
        );
        assert!(summary.by_status.sum() <= summary.total);
        assert_eq!(summary.by_status.sum(), 6);
    }

    #[test]
    fn overdue_split_reconciles() {
        let summary = summarize(&sample(), &[], now());
        assert_eq!(summary.evaluated_at, at(3, 4));
        assert_eq!(
            summary.overdue,
            vec![
                OverdueRow {
                    category: StatusCategory::Completed,
                    on_time: 1,
                    overdue: 1,
                    total: 2,
                },
                OverdueRow {
                    category: StatusCategory::Returned,
                    on_time: 1,
                    overdue: 0,
                    total: 1,
                },
                OverdueRow {
                    category: StatusCategory::Assigned,
                    on_time: 1,
                    overdue: 1,
                    total: 2,
                },
            ]
        );
        for row in &summary.overdue {
            assert_eq!(row.on_time + row.overdue, row.total);
            assert_eq!(row.total, summary.by_status.get(row.category));
        }
    }

    #[test]
    fn technician_rows_follow_requested_order() {
        let rows = technician_breakdown(
            &sample(),
            &["Luis".to_string(), "Ana".to_string(), "Marta".to_string()],
        );
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].technician, "Luis");
        assert_eq!(rows[0].counts.assigned, 2);
        assert_eq!(rows[0].counts.en_route, 1);
        assert_eq!(rows[0].total, 4);

        assert_eq!(rows[1].technician, "Ana");
        assert_eq!(rows[1].counts.completed, 2);
        assert_eq!(rows[1].counts.returned, 1);
        assert_eq!(rows[1].total, 3);

        assert_eq!(rows[2].counts, CategoryCounts::default());
        assert_eq!(rows[2].total, 0);
    }

    #[test]
    fn default_technicians_are_sorted_and_unique() {
        assert_eq!(technicians(&sample()), vec!["Ana", "Luis", "Sin asignar"]);
    }

    #[test]
    fn technician_row_flattens_counts() {
        let row = &technician_breakdown(&sample(), &["Ana".to_string()])[0];
        let json = serde_json::to_value(row).unwrap();
        assert_eq!(json["technician"], "Ana");
        assert_eq!(json["completed"], 2);
        assert_eq!(json["total"], 3);
    }

    #[test]
    fn empty_record_set() {
        let summary = summarize(&[], &[], now());
        assert_eq!(summary.total, 0);
        assert!(summary.by_technician.is_empty());
        assert!(summary.overdue.iter().all(|row| row.total == 0));
    }
}
