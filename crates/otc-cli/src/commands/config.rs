use std::collections::BTreeMap;

use otc_config::OtcConfig;
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::output::{self, Tabular, table::TableOptions};

const REDACTED: &str = "********";

/// Effective settings keyed by dotted path.
#[derive(Serialize)]
#[serde(transparent)]
struct Settings(BTreeMap<String, Value>);

impl Tabular for Settings {
    fn to_table(&self, options: TableOptions) -> String {
        output::key_value_table(&self.0, options)
    }
}

/// Handle `otc config`: print the effective configuration with secrets redacted.
pub fn handle(config: &OtcConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let settings = Settings(flatten(&serde_json::to_value(config)?));
    output::output(&settings, flags.format)
}

/// Flatten nested sections into dotted keys (`api.base_url`), redacting the token.
fn flatten(value: &Value) -> BTreeMap<String, Value> {
    let mut entries = BTreeMap::new();
    collect(String::new(), value, &mut entries);
    if let Some(token) = entries.get_mut("api.token")
        && token.as_str().is_some_and(|t| !t.is_empty())
    {
        *token = Value::String(REDACTED.to_string());
    }
    entries
}

fn collect(prefix: String, value: &Value, entries: &mut BTreeMap<String, Value>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect(key, nested, entries);
            }
        }
        other => {
            entries.insert(prefix, other.clone());
        }
    }
}
