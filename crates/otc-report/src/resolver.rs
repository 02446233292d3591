//! Picks the current status of a task from its unordered status history.

use chrono::NaiveDateTime;
use otc_core::entities::{ResolvedStatus, StatusChangeEvent};
use otc_core::time::to_display;

/// Resolve the current status from a task's status-change events.
///
/// Events are ordered newest first (missing or unparseable timestamps last)
/// and the first one that records a destination status wins. Events sharing
/// a timestamp are ordered by label, so the result does not depend on the
/// order the source returned them in.
#[must_use]
pub fn resolve_status(events: &[StatusChangeEvent]) -> ResolvedStatus {
    let mut candidates: Vec<(Option<NaiveDateTime>, Option<&str>)> = events
        .iter()
        .map(|event| (event.created_at(), event.to_status_label()))
        .collect();

    candidates.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| a.1.is_none().cmp(&b.1.is_none()))
            .then_with(|| a.1.cmp(&b.1))
    });

    candidates
        .into_iter()
        .find_map(|(created_at, label)| {
            label.map(|label| ResolvedStatus::Known {
                label: label.to_string(),
                timestamp: created_at.map(to_display),
            })
        })
        .unwrap_or(ResolvedStatus::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use otc_core::entities::StatusStepRef;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn event(when: Option<&str>, to: Option<&str>) -> StatusChangeEvent {
        StatusChangeEvent {
            id: None,
            when_created: when.map(str::to_string),
            to_status_step: to.map(StatusStepRef::named),
        }
    }

    fn display(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 2)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn history() -> Vec<StatusChangeEvent> {
        vec![
            event(Some("2024-05-02T09:00:00Z"), Some("Asignada")),
            event(Some("2024-05-02T13:00:00Z"), None),
            event(None, Some("Abierta")),
            event(Some("2024-05-02T12:15:00Z"), Some("Completada")),
            event(Some("2024-05-02T11:00:00Z"), Some("En proceso")),
        ]
    }

    #[test]
    fn newest_event_with_destination_wins() {
        assert_eq!(
            resolve_status(&history()),
            ResolvedStatus::Known {
                label: "Completada".into(),
                timestamp: Some(display(10, 15)),
            }
        );
    }

    #[test]
    fn result_is_independent_of_input_order() {
        let expected = resolve_status(&history());
        let mut events = history();
        for rotation in 0..events.len() {
            events.rotate_left(1);
            assert_eq!(resolve_status(&events), expected, "rotation {rotation}");
        }
        events.reverse();
        assert_eq!(resolve_status(&events), expected);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![event(Some("2024-05-02T09:00:00Z"), None)])]
    #[case(vec![event(None, None), event(Some("2024-05-02T10:00:00Z"), None)])]
    fn no_destination_means_unknown(#[case] events: Vec<StatusChangeEvent>) {
        let resolved = resolve_status(&events);
        assert_eq!(resolved, ResolvedStatus::Unknown);
        assert_eq!(resolved.timestamp(), None);
    }

    #[test]
    fn undated_event_is_used_only_when_nothing_dated_qualifies() {
        let events = vec![
            event(None, Some("Asignada")),
            event(Some("2024-05-02T10:00:00Z"), None),
        ];
        assert_eq!(
            resolve_status(&events),
            ResolvedStatus::Known {
                label: "Asignada".into(),
                timestamp: None,
            }
        );
    }

    #[test]
    fn unparseable_timestamp_sorts_last() {
        let events = vec![
            event(Some("not a date"), Some("Devuelta")),
            event(Some("2024-05-02T08:00:00Z"), Some("Asignada")),
        ];
        assert_eq!(resolve_status(&events).label(), Some("Asignada"));
    }

    #[test]
    fn tie_on_timestamp_prefers_event_with_destination() {
        let events = vec![
            event(Some("2024-05-02T10:00:00Z"), None),
            event(Some("2024-05-02T10:00:00Z"), Some("en camino")),
        ];
        assert_eq!(resolve_status(&events).label(), Some("en camino"));
    }

    #[test]
    fn tie_between_destinations_is_reproducible() {
        let a = event(Some("2024-05-02T10:00:00Z"), Some("Devuelta"));
        let b = event(Some("2024-05-02T10:00:00Z"), Some("Completada"));
        let forward = resolve_status(&[a.clone(), b.clone()]);
        let backward = resolve_status(&[b, a]);
        assert_eq!(forward, backward);
        assert_eq!(forward.label(), Some("Completada"));
    }

    #[test]
    fn sub_second_differences_order_events() {
        let events = vec![
            event(Some("2024-05-02T10:00:00Z"), Some("En proceso")),
            event(Some("2024-05-02T10:00:00.500Z"), Some("Completada")),
        ];
        assert_eq!(resolve_status(&events).label(), Some("Completada"));
    }
}
