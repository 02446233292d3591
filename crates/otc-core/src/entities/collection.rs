use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// One page of a paginated API listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Collection<T> {
    /// Total number of matches reported by the server.
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub results: Vec<T>,
}

impl<T> Collection<T> {
    /// Whether the page carries no results. `count` is advisory and may be
    /// absent, so only `results` decides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_count_with_results_is_not_empty() {
        let page: Collection<u32> = serde_json::from_str(r#"{"results": [1, 2]}"#).unwrap();
        assert_eq!(page.count, 0);
        assert!(!page.is_empty());
    }

    #[test]
    fn null_results_is_empty() {
        let page: Collection<u32> =
            serde_json::from_str(r#"{"count": 4, "results": null}"#).unwrap();
        assert!(page.is_empty());
    }
}
