//! Status and technician selection applied before the timeline and
//! summaries are built.

use otc_core::entities::Record;

/// `None` on a field means "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub statuses: Option<Vec<String>>,
    pub technicians: Option<Vec<String>>,
}

impl RecordFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_none() && self.technicians.is_none()
    }

    /// Records with no resolved status never match a status restriction.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        let status_ok = self.statuses.as_ref().is_none_or(|allowed| {
            record
                .status
                .as_ref()
                .is_some_and(|status| allowed.contains(status))
        });
        let technician_ok = self
            .technicians
            .as_ref()
            .is_none_or(|allowed| allowed.contains(&record.technician));
        status_ok && technician_ok
    }

    #[must_use]
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(code: &str, tech: &str, status: Option<&str>) -> Record {
        Record {
            code: code.into(),
            technician: tech.into(),
            status: status.map(str::to_string),
            timestamp: None,
            client: "ACME".into(),
            event: "Visita".into(),
            site: "Centro".into(),
        }
    }

    fn records() -> Vec<Record> {
        vec![
            record("1", "Ana", Some("Completada")),
            record("2", "Luis", Some("Asignada")),
            record("3", "Ana", None),
            record("4", "Luis", Some("Devuelta")),
        ]
    }

    fn codes(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.code.as_str()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = RecordFilter::default();
        assert!(filter.is_empty());
        assert_eq!(codes(&filter.apply(&records())), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn status_filter_drops_unresolved() {
        let filter = RecordFilter {
            statuses: Some(vec!["Completada".into(), "Devuelta".into()]),
            technicians: None,
        };
        assert_eq!(codes(&filter.apply(&records())), vec!["1", "4"]);
    }

    #[test]
    fn both_restrictions_apply() {
        let filter = RecordFilter {
            statuses: Some(vec!["Asignada".into(), "Completada".into()]),
            technicians: Some(vec!["Luis".into()]),
        };
        assert_eq!(codes(&filter.apply(&records())), vec!["2"]);
    }
}
