use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::StatusCategory;
use crate::serde_helpers::display_timestamp;

/// The status considered current for a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedStatus {
    /// A transition recorded a destination status. The timestamp is in
    /// primary display time, absent when the winning event had none.
    Known {
        label: String,
        timestamp: Option<NaiveDateTime>,
    },
    /// No event carried a usable destination status.
    Unknown,
}

impl ResolvedStatus {
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Known { label, .. } => Some(label),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub const fn timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Known { timestamp, .. } => *timestamp,
            Self::Unknown => None,
        }
    }
}

/// One normalized row per task; the unit the timeline and summaries consume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub code: String,
    pub technician: String,
    pub status: Option<String>,
    #[serde(default, with = "display_timestamp")]
    pub timestamp: Option<NaiveDateTime>,
    pub client: String,
    pub event: String,
    pub site: String,
}

impl Record {
    /// Recognized category of the resolved status, if any.
    #[must_use]
    pub fn category(&self) -> Option<StatusCategory> {
        self.status.as_deref().and_then(StatusCategory::from_label)
    }
}
