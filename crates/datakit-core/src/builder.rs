//! Write-side builder: accumulate a mapping while omitting defaults.
//!
//! [`DataBuilder`] assembles an output mapping one `set*` call at a time.
//! Each setter takes an optional "ignored default" sentinel: when the
//! (coerced) value equals the sentinel, the key is simply not added. This
//! keeps generated payloads compact — fields at their default value never
//! appear in the output at all.
//!
//! Sentinel comparison is strict by type and value (`"42"` is not `42`,
//! `0` is not `0.0` and not `false`); the comparison happens after
//! coercion, in the target type. `None` means "no sentinel, always insert".
//!
//! ```rust
//! use datakit_core::DataBuilder;
//! use serde_json::json;
//!
//! let mut builder = DataBuilder::new();
//! builder
//!     .set_string("name", json!("Alice"), Some(""))
//!     .set_i64("retries", json!(0), Some(0))
//!     .set_bool("active", json!(1), None);
//! // "retries" was at its ignored default and is absent.
//! assert_eq!(builder.into_value(), json!({"name": "Alice", "active": true}));
//! ```

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::coerce;
use crate::datetime;

/// Accumulator for an insertion-ordered output mapping.
///
/// All setters return `&mut Self` for chaining. Re-setting an existing key
/// replaces its value in place without moving the key. Not synchronized:
/// one builder per producer, merged afterwards if needed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataBuilder {
    data: Map<String, Value>,
}

impl DataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key → value` unless `value` equals the sentinel. A skipped
    /// set never removes a pre-existing entry for the key.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: Value,
        ignored_default: Option<Value>,
    ) -> &mut Self {
        if ignored_default.as_ref() != Some(&value) {
            self.data.insert(key.into(), value);
        }
        self
    }

    /// Coerce to boolean (truthiness), then [`DataBuilder::set`] with the
    /// typed sentinel.
    pub fn set_bool(
        &mut self,
        key: impl Into<String>,
        value: Value,
        ignored_default: Option<bool>,
    ) -> &mut Self {
        self.set(
            key,
            Value::Bool(coerce::to_bool(&value)),
            ignored_default.map(Value::Bool),
        )
    }

    /// Coerce to integer, then [`DataBuilder::set`] with the typed sentinel.
    pub fn set_i64(
        &mut self,
        key: impl Into<String>,
        value: Value,
        ignored_default: Option<i64>,
    ) -> &mut Self {
        self.set(
            key,
            Value::from(coerce::to_i64(&value)),
            ignored_default.map(Value::from),
        )
    }

    /// Coerce to float, then [`DataBuilder::set`] with the typed sentinel.
    pub fn set_f64(
        &mut self,
        key: impl Into<String>,
        value: Value,
        ignored_default: Option<f64>,
    ) -> &mut Self {
        self.set(
            key,
            Value::from(coerce::to_f64(&value)),
            ignored_default.map(Value::from),
        )
    }

    /// Coerce to text, then [`DataBuilder::set`] with the typed sentinel.
    /// No trimming on the write side; only the accessor trims.
    pub fn set_string(
        &mut self,
        key: impl Into<String>,
        value: Value,
        ignored_default: Option<&str>,
    ) -> &mut Self {
        self.set(
            key,
            Value::String(coerce::to_text(&value)),
            ignored_default.map(|s| Value::String(s.to_string())),
        )
    }

    /// Format an instant with a strftime specifier and set the resulting
    /// text. A `None` value is nothing to set and a silent no-op, as is a
    /// malformed format specifier; the write side never fails.
    pub fn set_datetime(
        &mut self,
        key: impl Into<String>,
        value: Option<DateTime<Utc>>,
        format: &str,
        ignored_default: Option<&str>,
    ) -> &mut Self {
        if let Some(instant) = value {
            if let Some(text) = datetime::format(&instant, format) {
                return self.set(
                    key,
                    Value::String(text),
                    ignored_default.map(|s| Value::String(s.to_string())),
                );
            }
        }
        self
    }

    /// Set an array-like value (sequence or mapping) as-is. Anything else
    /// is a silent no-op.
    pub fn set_array(
        &mut self,
        key: impl Into<String>,
        value: Value,
        ignored_default: Option<Value>,
    ) -> &mut Self {
        match value {
            Value::Array(_) | Value::Object(_) => self.set(key, value, ignored_default),
            _ => self,
        }
    }

    /// Like [`DataBuilder::set_array`], with an elementwise transform
    /// applied first. Order is preserved; mapping input keeps its keys and
    /// transforms the member values. The sentinel is compared against the
    /// transformed result.
    pub fn set_array_with<F>(
        &mut self,
        key: impl Into<String>,
        value: Value,
        transform: F,
        ignored_default: Option<Value>,
    ) -> &mut Self
    where
        F: FnMut(Value) -> Value,
    {
        let mut transform = transform;
        match value {
            Value::Array(items) => {
                let mapped: Vec<Value> = items.into_iter().map(&mut transform).collect();
                self.set(key, Value::Array(mapped), ignored_default)
            }
            Value::Object(map) => {
                let mapped: Map<String, Value> =
                    map.into_iter().map(|(k, v)| (k, transform(v))).collect();
                self.set(key, Value::Object(mapped), ignored_default)
            }
            _ => self,
        }
    }

    /// Materialize any finite iterable of values into a sequence, then
    /// [`DataBuilder::set`]. Apply iterator adapters for transforms.
    pub fn set_from_iter<I>(
        &mut self,
        key: impl Into<String>,
        values: I,
        ignored_default: Option<Value>,
    ) -> &mut Self
    where
        I: IntoIterator<Item = Value>,
    {
        let items: Vec<Value> = values.into_iter().collect();
        self.set(key, Value::Array(items), ignored_default)
    }

    /// The accumulated mapping, in first-insertion order.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Consume the builder and return the accumulated mapping as a value,
    /// ready for a downstream serializer.
    pub fn into_value(self) -> Value {
        Value::Object(self.data)
    }
}
