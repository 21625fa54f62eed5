//! Read-side accessor: safe, type-coerced navigation of nested values.
//!
//! [`DataContainer`] wraps one decoded value (a JSON document, a config
//! tree, a database row) and answers typed lookups along key paths without
//! ever panicking on absent or wrong-typed data. Missing keys are expected,
//! not exceptional: every getter falls back to a caller-supplied default.
//!
//! The getter surface lives on the [`Container`] trait so that richer
//! wrapper types inherit it wholesale; `get_object` and `get_object_array`
//! construct `Self`, which lets a wrapper's type propagate into nested
//! lookups:
//!
//! ```rust
//! use datakit_core::{Container, DataContainer, Map, Value};
//!
//! struct Event(DataContainer);
//!
//! impl Container for Event {
//!     fn from_value(value: Value) -> Self {
//!         Event(DataContainer::from_value(value))
//!     }
//!     fn data(&self) -> &Map<String, Value> {
//!         self.0.data()
//!     }
//! }
//!
//! impl Event {
//!     fn summary(&self) -> String {
//!         self.get_string("summary", "")
//!     }
//! }
//!
//! let doc = serde_json::json!({"items": [{"summary": " Standup "}]});
//! let events = Event::from_value(doc).get_object_array("items");
//! assert_eq!(events[0].summary(), "Standup");
//! ```

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::coerce;
use crate::datetime;
use crate::error::Result;
use crate::path::Path;

/// The read-side getter surface.
///
/// Implementors supply construction and access to the wrapped mapping; all
/// getters are provided. Construction never fails: a non-mapping value
/// wraps as an empty mapping.
pub trait Container: Sized {
    /// Wrap a value. Anything that is not a mapping becomes an empty one.
    fn from_value(value: Value) -> Self;

    /// The wrapped mapping. Immutable for the instance's lifetime.
    fn data(&self) -> &Map<String, Value>;

    /// Walk a path segment by segment. At each segment the current value
    /// must be a mapping containing the key; otherwise the walk aborts and
    /// absence is reported as `None`.
    fn get<'p, P: Path<'p>>(&self, path: P) -> Option<&Value> {
        let mut keys = path.into_keys();
        let mut current = self.data().get(keys.next()?)?;
        for key in keys {
            current = current.as_object()?.get(key)?;
        }
        Some(current)
    }

    /// Boolean lookup via truthiness. An absent path returns `default`
    /// untouched.
    fn get_bool<'p, P: Path<'p>>(&self, path: P, default: bool) -> bool {
        match self.get(path) {
            Some(value) => coerce::to_bool(value),
            None => default,
        }
    }

    /// Integer lookup. Strings parse their leading integer prefix, floats
    /// truncate, non-numeric values collapse to 0 or 1.
    fn get_i64<'p, P: Path<'p>>(&self, path: P, default: i64) -> i64 {
        match self.get(path) {
            Some(value) => coerce::to_i64(value),
            None => default,
        }
    }

    /// Float lookup, same coercion shape as [`Container::get_i64`].
    fn get_f64<'p, P: Path<'p>>(&self, path: P, default: f64) -> f64 {
        match self.get(path) {
            Some(value) => coerce::to_f64(value),
            None => default,
        }
    }

    /// Text lookup. The result is trimmed of surrounding whitespace; the
    /// default flows through the same trim.
    fn get_string<'p, P: Path<'p>>(&self, path: P, default: &str) -> String {
        let text = match self.get(path) {
            Some(value) => coerce::to_text(value),
            None => default.to_string(),
        };
        text.trim().to_string()
    }

    /// Date-time lookup. The value is resolved as text first: empty text
    /// returns `default` unchanged, canonical integer text is a Unix
    /// timestamp in seconds, anything else goes through the free-form
    /// layouts in [`crate::datetime`]. The only getter that can fail.
    fn get_datetime<'p, P: Path<'p>>(
        &self,
        path: P,
        default: Option<DateTime<Utc>>,
    ) -> Result<Option<DateTime<Utc>>> {
        let text = self.get_string(path, "");
        if text.is_empty() {
            return Ok(default);
        }
        datetime::parse(&text).map(Some)
    }

    /// Sub-accessor lookup with an implicit empty-mapping default. Builds
    /// `Self`, so wrapper types propagate into nested lookups.
    fn get_object<'p, P: Path<'p>>(&self, path: P) -> Self {
        Self::from_value(self.get(path).cloned().unwrap_or(Value::Null))
    }

    /// Array lookup. A resolved value that is array-like (sequence or
    /// mapping) is returned; anything else yields `default` verbatim,
    /// which is deliberately not re-validated as array-like.
    fn get_array<'p, P: Path<'p>>(&self, path: P, default: Value) -> Value {
        match self.get(path) {
            Some(value @ (Value::Array(_) | Value::Object(_))) => value.clone(),
            _ => default,
        }
    }

    /// Array lookup where every element is wrapped as a sub-accessor.
    /// Mapping input wraps its member values in order; non-array-like or
    /// missing input yields an empty vec.
    fn get_object_array<'p, P: Path<'p>>(&self, path: P) -> Vec<Self> {
        match self.get_array(path, Value::Array(Vec::new())) {
            Value::Array(items) => items.into_iter().map(Self::from_value).collect(),
            Value::Object(map) => map.into_iter().map(|(_, v)| Self::from_value(v)).collect(),
            _ => Vec::new(),
        }
    }
}

/// The canonical accessor over a decoded nested value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataContainer {
    data: Map<String, Value>,
}

impl DataContainer {
    /// Wrap a decoded value. A non-mapping value wraps as an empty mapping,
    /// so construction never fails.
    pub fn new(value: Value) -> Self {
        match value {
            Value::Object(map) => Self { data: map },
            _ => Self { data: Map::new() },
        }
    }
}

impl Container for DataContainer {
    fn from_value(value: Value) -> Self {
        Self::new(value)
    }

    fn data(&self) -> &Map<String, Value> {
        &self.data
    }
}

impl From<Value> for DataContainer {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
