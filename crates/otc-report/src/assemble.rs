//! Merges task detail and resolved status into one [`Record`].
//!
//! Never fails: every missing field degrades to a sentinel.

use std::sync::LazyLock;

use otc_core::entities::{Record, ResolvedStatus, Task};
use otc_core::sentinel;
use regex::Regex;

static CLIENT_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"1\. Nombre Cliente:(.*)").expect("client label pattern should compile")
});

/// Client name from a `1. Nombre Cliente: <name>` line of the description.
#[must_use]
pub fn client_from_description(description: &str) -> Option<String> {
    let name = CLIENT_LABEL.captures(description)?.get(1)?.as_str().trim();
    (!name.is_empty()).then(|| name.to_string())
}

#[must_use]
pub fn assemble_record(task: &Task, status: &ResolvedStatus) -> Record {
    let client = task
        .description
        .as_deref()
        .and_then(client_from_description)
        .unwrap_or_else(|| sentinel::NO_CLIENT.to_string());

    let technician = task
        .assigned_staff
        .as_ref()
        .and_then(|staff| staff.name.clone())
        .unwrap_or_else(|| sentinel::UNASSIGNED.to_string());

    let site = task
        .sites
        .first()
        .and_then(|site| site.name.clone())
        .unwrap_or_else(|| sentinel::UNDEFINED_SITE.to_string());

    Record {
        code: task.code.clone().unwrap_or_else(|| task.id.clone()),
        technician,
        status: status.label().map(str::to_string),
        timestamp: status.timestamp(),
        client,
        event: task
            .name
            .clone()
            .unwrap_or_else(|| sentinel::NO_EVENT.to_string()),
        site,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use otc_core::entities::{SiteRef, StaffRef};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn full_task() -> Task {
        Task {
            id: "981234".into(),
            code: Some("OTC-1001".into()),
            description: Some(
                "Orden urgente\n1. Nombre Cliente:  ACME S.A. \n2. Teléfono: 555\n".into(),
            ),
            name: Some("Instalación fibra".into()),
            assigned_staff: Some(StaffRef {
                id: Some("17".into()),
                name: Some("Ana Rojas".into()),
            }),
            sites: vec![
                SiteRef {
                    id: Some("5".into()),
                    name: Some("San José Centro".into()),
                },
                SiteRef {
                    id: Some("6".into()),
                    name: Some("Heredia".into()),
                },
            ],
            plan_date: Some("2024-05-02".into()),
            when_created: None,
        }
    }

    fn bare_task() -> Task {
        Task {
            id: "7".into(),
            code: None,
            description: None,
            name: None,
            assigned_staff: None,
            sites: Vec::new(),
            plan_date: None,
            when_created: None,
        }
    }

    #[test]
    fn full_task_maps_every_field() {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let status = ResolvedStatus::Known {
            label: "Completada".into(),
            timestamp: Some(ts),
        };
        assert_eq!(
            assemble_record(&full_task(), &status),
            Record {
                code: "OTC-1001".into(),
                technician: "Ana Rojas".into(),
                status: Some("Completada".into()),
                timestamp: Some(ts),
                client: "ACME S.A.".into(),
                event: "Instalación fibra".into(),
                site: "San José Centro".into(),
            }
        );
    }

    #[test]
    fn bare_task_degrades_to_sentinels() {
        let record = assemble_record(&bare_task(), &ResolvedStatus::Unknown);
        assert_eq!(record.code, "7");
        assert_eq!(record.technician, sentinel::UNASSIGNED);
        assert_eq!(record.client, sentinel::NO_CLIENT);
        assert_eq!(record.event, sentinel::NO_EVENT);
        assert_eq!(record.site, sentinel::UNDEFINED_SITE);
        assert_eq!(record.status, None);
        assert_eq!(record.timestamp, None);
    }

    #[test]
    fn staff_without_name_and_unnamed_first_site() {
        let mut task = bare_task();
        task.assigned_staff = Some(StaffRef::default());
        task.sites = vec![
            SiteRef::default(),
            SiteRef {
                id: None,
                name: Some("Heredia".into()),
            },
        ];
        let record = assemble_record(&task, &ResolvedStatus::Unknown);
        assert_eq!(record.technician, sentinel::UNASSIGNED);
        assert_eq!(record.site, sentinel::UNDEFINED_SITE);
    }

    #[rstest]
    #[case("1. Nombre Cliente: Banco Central\n", Some("Banco Central"))]
    #[case("1. Nombre Cliente:Banco Central", Some("Banco Central"))]
    #[case("x\r\n1. Nombre Cliente: Banco Central\r\n2. Otro: y", Some("Banco Central"))]
    #[case("1. Nombre Cliente:   \n", None)]
    #[case("Nombre del cliente: Banco Central\n", None)]
    #[case("", None)]
    fn client_label_extraction(#[case] description: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            client_from_description(description).as_deref(),
            expected
        );
    }
}
