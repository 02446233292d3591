//! Placeholder values used when task metadata is missing.
//!
//! Incomplete tasks are expected from the remote API and never block a report;
//! every missing field degrades to one of these strings.

/// Technician name when the task has no assigned staff.
pub const UNASSIGNED: &str = "Sin asignar";

/// Client name when the description is absent or carries no client label.
pub const NO_CLIENT: &str = "Sin cliente";

/// Event name when the task has no display name.
pub const NO_EVENT: &str = "Sin descripción";

/// Site name when the first site is missing or unnamed.
pub const UNDEFINED_SITE: &str = "Sin definir";

/// Status shown for tasks whose history resolved to no status.
pub const UNKNOWN_STATUS: &str = "Sin estado";
