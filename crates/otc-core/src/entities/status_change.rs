use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::option_string_or_number;
use crate::time::parse_source_timestamp;

/// One entry of a task's status history.
///
/// The source gives no ordering guarantee, timestamps may repeat or be
/// missing, and not every entry records a destination status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusChangeEvent {
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub when_created: Option<String>,
    #[serde(default)]
    pub to_status_step: Option<StatusStepRef>,
}

impl StatusChangeEvent {
    /// Creation time as written by the source, if present and parseable.
    #[must_use]
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.when_created.as_deref().and_then(parse_source_timestamp)
    }

    /// Name of the destination status, if the event records one.
    #[must_use]
    pub fn to_status_label(&self) -> Option<&str> {
        self.to_status_step.as_ref().and_then(StatusStepRef::label)
    }
}

/// Destination status of a transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusStepRef {
    #[serde(default, deserialize_with = "option_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<StepName>,
}

/// The API nests the human-readable name one level deeper
/// (`{"name": {"name": "Completada"}}`); a flat string is accepted too.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum StepName {
    Plain(String),
    Nested {
        #[serde(default)]
        name: Option<String>,
    },
}

impl StatusStepRef {
    /// Build a reference carrying only a name.
    #[must_use]
    pub fn named(label: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(StepName::Nested {
                name: Some(label.into()),
            }),
        }
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self.name.as_ref()? {
            StepName::Plain(name) => Some(name.as_str()),
            StepName::Nested { name } => name.as_deref(),
        }
    }
}
