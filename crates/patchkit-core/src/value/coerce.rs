//! Conversion of untyped mutation values into declared property types.
//!
//! Coercion never panics and never raises past the applier: a value that
//! does not fit yields a [`CoercionError`] and the property stays as it was.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::variant::{Scalar, Variant};
use crate::errors::CoercionError;

/// A type a scalar, enum or primitive-collection property can hold
pub trait Coerce: Sized {
    /// Render the current value for a mutation
    fn to_variant(&self) -> Variant;

    /// Read a mutation value as this type
    ///
    /// # Errors
    ///
    /// Returns `CoercionError` when the value cannot represent this type.
    fn coerce(value: &Variant) -> Result<Self, CoercionError>;
}

fn scalar<'a>(value: &'a Variant, expected: &'static str) -> Result<&'a Scalar, CoercionError> {
    match value {
        Variant::Scalar(s) => Ok(s),
        other => Err(CoercionError::new(expected, other.type_label())),
    }
}

fn mismatch(expected: &'static str, found: &Scalar) -> CoercionError {
    CoercionError::new(expected, format!("{:?}", found))
}

impl Coerce for String {
    fn to_variant(&self) -> Variant {
        Variant::from(self.as_str())
    }

    fn coerce(value: &Variant) -> Result<Self, CoercionError> {
        match scalar(value, "string")? {
            Scalar::String(s) => Ok(s.clone()),
            Scalar::Integer(i) => Ok(i.to_string()),
            Scalar::Float(f) => Ok(f.to_string()),
            Scalar::Bool(b) => Ok(b.to_string()),
            Scalar::Date(d) => Ok(d.to_rfc3339()),
            other @ Scalar::Null => Err(mismatch("string", other)),
        }
    }
}

impl Coerce for i64 {
    fn to_variant(&self) -> Variant {
        Variant::from(*self)
    }

    fn coerce(value: &Variant) -> Result<Self, CoercionError> {
        match scalar(value, "integer")? {
            Scalar::Integer(i) => Ok(*i),
            Scalar::Float(f) if f.is_finite() && f.fract() == 0.0 => {
                if *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Ok(*f as i64)
                } else {
                    Err(CoercionError::new("integer", f.to_string()))
                }
            }
            Scalar::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| CoercionError::new("integer", s.clone())),
            other => Err(mismatch("integer", other)),
        }
    }
}

macro_rules! coerce_narrow_integer {
    ($($ty:ty),+) => {
        $(
            impl Coerce for $ty {
                fn to_variant(&self) -> Variant {
                    Variant::from(i64::from(*self))
                }

                fn coerce(value: &Variant) -> Result<Self, CoercionError> {
                    let wide = i64::coerce(value)?;
                    <$ty>::try_from(wide)
                        .map_err(|_| CoercionError::new(stringify!($ty), wide.to_string()))
                }
            }
        )+
    };
}

coerce_narrow_integer!(i32, u32);

impl Coerce for f64 {
    fn to_variant(&self) -> Variant {
        Variant::from(*self)
    }

    fn coerce(value: &Variant) -> Result<Self, CoercionError> {
        match scalar(value, "number")? {
            Scalar::Float(f) => Ok(*f),
            Scalar::Integer(i) => Ok(*i as f64),
            Scalar::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| CoercionError::new("number", s.clone())),
            other => Err(mismatch("number", other)),
        }
    }
}

impl Coerce for bool {
    fn to_variant(&self) -> Variant {
        Variant::from(*self)
    }

    fn coerce(value: &Variant) -> Result<Self, CoercionError> {
        match scalar(value, "bool")? {
            Scalar::Bool(b) => Ok(*b),
            Scalar::String(s) if s.trim().eq_ignore_ascii_case("true") => Ok(true),
            Scalar::String(s) if s.trim().eq_ignore_ascii_case("false") => Ok(false),
            other => Err(mismatch("bool", other)),
        }
    }
}

impl Coerce for DateTime<Utc> {
    fn to_variant(&self) -> Variant {
        Variant::from(*self)
    }

    /// Accepts RFC 3339 text, a bare `YYYY-MM-DD` date (midnight UTC) or
    /// epoch milliseconds.
    fn coerce(value: &Variant) -> Result<Self, CoercionError> {
        match scalar(value, "date")? {
            Scalar::Date(d) => Ok(*d),
            Scalar::Integer(millis) => DateTime::from_timestamp_millis(*millis)
                .ok_or_else(|| CoercionError::new("date", millis.to_string())),
            Scalar::String(s) => {
                parse_date(s.trim()).ok_or_else(|| CoercionError::new("date", s.clone()))
            }
            other => Err(mismatch("date", other)),
        }
    }
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(d) = DateTime::parse_from_rfc3339(s) {
        return Some(d.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl<C: Coerce> Coerce for Option<C> {
    fn to_variant(&self) -> Variant {
        match self {
            Some(inner) => inner.to_variant(),
            None => Variant::null(),
        }
    }

    fn coerce(value: &Variant) -> Result<Self, CoercionError> {
        if value.is_null() {
            Ok(None)
        } else {
            C::coerce(value).map(Some)
        }
    }
}

/// Render an enum constant by its serialized name
pub fn name_to_variant<E: Serialize>(constant: &E) -> Variant {
    match serde_json::to_value(constant) {
        Ok(Value::String(name)) => Variant::from(name),
        _ => Variant::null(),
    }
}

/// Read an enum constant from its serialized name (exact match)
///
/// # Errors
///
/// Returns `CoercionError` when the value is not a string or names no constant.
pub fn name_from_variant<E: DeserializeOwned>(value: &Variant) -> Result<E, CoercionError> {
    match scalar(value, "enum constant name")? {
        Scalar::String(name) => serde_json::from_value(Value::String(name.clone()))
            .map_err(|_| CoercionError::new("enum constant name", name.clone())),
        other => Err(mismatch("enum constant name", other)),
    }
}

/// Render an embedded value object as structured content
pub fn embedded_to_variant<E: Serialize>(value: &E) -> Variant {
    Variant::Embedded(serde_json::to_value(value).unwrap_or(Value::Null))
}

/// Build an embedded value object from structured content
///
/// # Errors
///
/// Returns `CoercionError` when the value is not structured content or does
/// not decode into `E`.
pub fn embedded_from_variant<E: DeserializeOwned>(value: &Variant) -> Result<E, CoercionError> {
    match value {
        Variant::Embedded(content) => serde_json::from_value(content.clone())
            .map_err(|e| CoercionError::new("embedded object", e.to_string())),
        other => Err(CoercionError::new("embedded object", other.type_label())),
    }
}

/// Implement [`Coerce`] for serde-named enums
///
/// Constants are rendered and read through their serialized names, so
/// `#[serde(rename_all = "SCREAMING_SNAKE_CASE")]` decides the accepted text.
///
/// ```
/// use patchkit_core::coerce_by_name;
/// use patchkit_core::value::{Coerce, Variant};
///
/// #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// enum Period { Monthly, Yearly }
///
/// coerce_by_name!(Period);
///
/// assert_eq!(Period::coerce(&Variant::from("YEARLY")), Ok(Period::Yearly));
/// ```
#[macro_export]
macro_rules! coerce_by_name {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::value::Coerce for $ty {
                fn to_variant(&self) -> $crate::value::Variant {
                    $crate::value::coerce::name_to_variant(self)
                }

                fn coerce(
                    value: &$crate::value::Variant,
                ) -> ::std::result::Result<Self, $crate::errors::CoercionError> {
                    $crate::value::coerce::name_from_variant(value)
                }
            }
        )+
    };
}
