//! Entity structs for the OTC domain.
//!
//! Raw payloads (`Task`, `StatusChangeEvent`, `Collection`) mirror the JSON
//! returned by the work-order API and tolerate missing or `null` fields.
//! Derived entities (`ResolvedStatus`, `Record`) are produced once per task
//! and never mutated afterwards.

mod collection;
mod record;
mod status_change;
mod task;

pub use collection::Collection;
pub use record::{Record, ResolvedStatus};
pub use status_change::{StatusChangeEvent, StatusStepRef, StepName};
pub use task::{SiteRef, StaffRef, Task};
