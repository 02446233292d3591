use serde::{Deserialize, Serialize};

use crate::serde_helpers::{null_as_default, option_string_or_number, string_or_number};

/// A field work order (OTC) as returned by the task endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub code: Option<String>,
    /// Free text; may embed the client name under a `Nombre Cliente:` label.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub assigned_staff: Option<StaffRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sites: Vec<SiteRef>,
    #[serde(default)]
    pub plan_date: Option<String>,
    #[serde(default)]
    pub when_created: Option<String>,
}

/// Reference to the technician a task is assigned to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaffRef {
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Reference to a site a task is performed at.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteRef {
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
