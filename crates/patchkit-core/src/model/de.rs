//! Field deserializers shared by the model types.
//!
//! The codec blanks `""` members to `null` before decoding, so a field that
//! cannot hold `null` must read it as its default.

use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::value::{Coerce, Variant};

/// Read `null` as `T::default()`
///
/// # Errors
///
/// Returns the deserializer's error when the value is neither `null` nor a `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a date the way mutation values are coerced: RFC 3339 text, a bare
/// `YYYY-MM-DD` date or epoch milliseconds.
///
/// # Errors
///
/// Returns a custom error when the value is none of those forms.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Option::<DateTime<Utc>>::coerce(&Variant::from_json(&raw)).map_err(D::Error::custom)
}
