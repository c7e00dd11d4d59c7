//! Typed extraction from loosely-typed JSON objects
//!
//! The wire delivers `serde_json` values; domain records want exact types.
//! This module provides the extraction primitives: [`require`] / [`optional`]
//! for plain values, plus URL and timestamp variants. Every extractor is pure
//! and returns a [`DecodeError`] instead of coercing or panicking, so record
//! constructors compose them with `?` and the first failure aborts the whole
//! construction.
//!
//! # Example
//!
//! ```rust,ignore
//! let name: String = decode::require(&json, "name")?;
//! let homepage: Option<String> = decode::optional(&json, "homepage")?;
//! let html_url = decode::require_url(&json, "html_url")?;
//! ```

pub mod error;

pub use error::{DecodeError, DecodeResult};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use url::Url;

/// A JSON object as delivered by the wire: string keys, dynamically typed values
pub type JsonObject = serde_json::Map<String, Value>;

/// The single timestamp format the API uses (UTC, Gregorian)
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Types constructible from a whole JSON object
///
/// Implementations must be atomic: either every field decodes and a fully
/// populated record is returned, or the first failing field's error is
/// propagated and no partial record is ever observable.
pub trait Decodable: Sized {
    /// Decode `json` into a fully populated record
    fn decode(json: &JsonObject) -> DecodeResult<Self>;
}

/// Types extractable from a single JSON value
pub trait FromJsonValue: Sized {
    /// Static JSON type name used in [`DecodeError::TypeMismatch`] diagnostics
    const EXPECTED: &'static str;

    /// Extract an owned value, or `None` when the JSON type does not match
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromJsonValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromJsonValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FromJsonValue for u64 {
    const EXPECTED: &'static str = "unsigned integer";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_u64()
    }
}

impl FromJsonValue for f64 {
    const EXPECTED: &'static str = "number";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromJsonValue for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromJsonValue for Vec<Value> {
    const EXPECTED: &'static str = "array";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_array().cloned()
    }
}

impl FromJsonValue for JsonObject {
    const EXPECTED: &'static str = "object";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

/// Name of the JSON type actually present, for diagnostics
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extract a required field
///
/// Fails with [`DecodeError::MissingKey`] when the key is absent and
/// [`DecodeError::TypeMismatch`] when it holds the wrong JSON type.
pub fn require<T: FromJsonValue>(json: &JsonObject, key: &str) -> DecodeResult<T> {
    let value = json
        .get(key)
        .ok_or_else(|| DecodeError::MissingKey(key.to_owned()))?;

    T::from_value(value).ok_or_else(|| DecodeError::TypeMismatch {
        key: key.to_owned(),
        expected: T::EXPECTED,
        actual: json_type_name(value),
    })
}

/// Extract an optional field
///
/// An absent key and an explicit `null` both yield `Ok(None)`; a present,
/// non-null value of the wrong type is still a [`DecodeError::TypeMismatch`].
pub fn optional<T: FromJsonValue>(json: &JsonObject, key: &str) -> DecodeResult<Option<T>> {
    let value = match json.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    T::from_value(value)
        .map(Some)
        .ok_or_else(|| DecodeError::TypeMismatch {
            key: key.to_owned(),
            expected: T::EXPECTED,
            actual: json_type_name(value),
        })
}

/// Extract a required URL field (a string on the wire)
pub fn require_url(json: &JsonObject, key: &str) -> DecodeResult<Url> {
    let raw: String = require(json, key)?;
    Url::parse(&raw).map_err(|_| DecodeError::InvalidUrl {
        key: key.to_owned(),
        value: raw,
    })
}

/// Extract an optional URL field
pub fn optional_url(json: &JsonObject, key: &str) -> DecodeResult<Option<Url>> {
    let Some(raw) = optional::<String>(json, key)? else {
        return Ok(None);
    };

    match Url::parse(&raw) {
        Ok(url) => Ok(Some(url)),
        Err(_) => Err(DecodeError::InvalidUrl {
            key: key.to_owned(),
            value: raw,
        }),
    }
}

/// Extract a required timestamp field (`yyyy-MM-ddTHH:mm:ssZ` on the wire)
pub fn require_date(json: &JsonObject, key: &str) -> DecodeResult<DateTime<Utc>> {
    let raw: String = require(json, key)?;
    parse_date(&raw).ok_or_else(|| DecodeError::InvalidDate {
        key: key.to_owned(),
        value: raw,
    })
}

/// Extract an optional timestamp field
pub fn optional_date(json: &JsonObject, key: &str) -> DecodeResult<Option<DateTime<Utc>>> {
    let Some(raw) = optional::<String>(json, key)? else {
        return Ok(None);
    };

    match parse_date(&raw) {
        Some(date) => Ok(Some(date)),
        None => Err(DecodeError::InvalidDate {
            key: key.to_owned(),
            value: raw,
        }),
    }
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format a timestamp back to its wire representation
pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}
