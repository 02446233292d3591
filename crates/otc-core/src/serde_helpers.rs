//! Serde adapters for loosely typed API fields and display timestamps.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

use crate::time::DISPLAY_FORMAT;

/// Deserialize a field the API sends either as a string or as a number.
///
/// # Errors
///
/// Fails when the value is neither a string nor a number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

/// `Option<NaiveDateTime>` rendered as `YYYY/MM/DD HH:MM:SS`.
pub mod display_timestamp {
    use super::{DISPLAY_FORMAT, Deserialize, Deserializer, NaiveDateTime, Serializer};

    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.collect_str(&ts.format(DISPLAY_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    /// # Errors
    ///
    /// Fails when a present value does not match the display format.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| {
                NaiveDateTime::parse_from_str(&raw, DISPLAY_FORMAT).map_err(serde::de::Error::custom)
            })
            .transpose()
    }
}

/// Like [`string_or_number`] but tolerates a missing or `null` value.
///
/// # Errors
///
/// Fails when a present value is neither a string nor a number.
pub fn option_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "string_or_number")] String);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(s)| s))
}

/// Treat an explicit `null` the same as a missing field.
///
/// # Errors
///
/// Propagates errors from the inner type.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
