//! Filters for the bulk task query.

use serde::{Deserialize, Serialize};

const fn default_project() -> u64 {
    144_528
}

const fn default_task_template() -> u64 {
    741
}

/// Status steps a task must be in to show up on the timeline.
fn default_status_steps() -> Vec<u64> {
    vec![2898, 1249, 4014, 1246, 1300, 1245]
}

/// Single-page limit; pagination beyond this is not followed.
const fn default_limit() -> u32 {
    10_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    #[serde(default = "default_project")]
    pub project: u64,

    #[serde(default = "default_task_template")]
    pub task_template: u64,

    #[serde(default = "default_status_steps")]
    pub status_steps: Vec<u64>,

    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            project: default_project(),
            task_template: default_task_template(),
            status_steps: default_status_steps(),
            limit: default_limit(),
        }
    }
}
