//! Recognized status categories.
//!
//! Status labels come from the remote system verbatim (including its casing).
//! Only the labels below take part in per-status breakdowns; anything else is
//! counted in totals but has no category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// StatusCategory
// ---------------------------------------------------------------------------

/// The closed set of status categories reported on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatusCategory {
    #[serde(rename = "Asignada")]
    Assigned,
    #[serde(rename = "en camino")]
    EnRoute,
    #[serde(rename = "En proceso")]
    InProgress,
    #[serde(rename = "Devuelta")]
    Returned,
    #[serde(rename = "Completada")]
    Completed,
    #[serde(rename = "Abierta")]
    Open,
}

impl StatusCategory {
    /// Every category, in reporting column order.
    pub const ALL: [Self; 6] = [
        Self::Assigned,
        Self::EnRoute,
        Self::InProgress,
        Self::Returned,
        Self::Completed,
        Self::Open,
    ];

    /// Categories that get an on-time/overdue split.
    pub const OVERDUE_TRACKED: [Self; 3] = [Self::Completed, Self::Returned, Self::Assigned];

    /// The label exactly as the remote system sends it.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Assigned => "Asignada",
            Self::EnRoute => "en camino",
            Self::InProgress => "En proceso",
            Self::Returned => "Devuelta",
            Self::Completed => "Completada",
            Self::Open => "Abierta",
        }
    }

    /// Plural column heading used in summary tables.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Assigned => "Asignadas",
            Self::EnRoute => "En Camino",
            Self::InProgress => "En Proceso",
            Self::Returned => "Devueltas",
            Self::Completed => "Completadas",
            Self::Open => "Abiertas",
        }
    }

    /// Timeline bar color (`#RRGGBB`).
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Assigned => "#FFA500",
            Self::EnRoute => "#1E90FF",
            Self::InProgress => "#FFD700",
            Self::Returned => "#FF4444",
            Self::Completed => "#32CD32",
            Self::Open => "#B7B7B7",
        }
    }

    /// Match a raw label. Comparison is exact.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Color for labels outside the recognized set, and for unresolved statuses.
pub const UNKNOWN_STATUS_COLOR: &str = "#808080";

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}
