//! # datakit-core
//!
//! Typed accessors and default-omitting builders for loosely-typed,
//! arbitrarily nested key/value data — the kind produced by decoding JSON,
//! config files, or database rows.
//!
//! Two independent, stateless-between-calls pieces share one value model
//! (`serde_json::Value` with insertion-ordered maps) and one set of
//! coercion rules:
//!
//! - [`DataContainer`] (read side) wraps a decoded value and answers typed
//!   lookups along key paths, falling back to caller-supplied defaults on
//!   any traversal or type mismatch. Only `get_datetime` can fail.
//! - [`DataBuilder`] (write side) accumulates an output mapping, skipping
//!   any key whose coerced value equals a caller-supplied "ignored
//!   default" sentinel, for compact payload generation.
//!
//! ## Quick start
//!
//! ```rust
//! use datakit_core::{Container, DataBuilder, DataContainer};
//! use serde_json::json;
//!
//! let doc = json!({"user": {"name": "  Alice  ", "age": "42"}});
//! let container = DataContainer::new(doc);
//! assert_eq!(container.get_string(["user", "name"], ""), "Alice");
//! assert_eq!(container.get_i64(["user", "age"], 0), 42);
//! assert_eq!(container.get_bool(["user", "admin"], false), false);
//!
//! let mut builder = DataBuilder::new();
//! builder
//!     .set_string("name", json!("Alice"), Some(""))
//!     .set_i64("age", json!("42"), Some(0))
//!     .set_bool("admin", json!(false), Some(false)); // at default: omitted
//! assert_eq!(builder.into_value(), json!({"name": "Alice", "age": 42}));
//! ```
//!
//! ## Modules
//!
//! - [`container`] — read-side accessor ([`Container`] trait + [`DataContainer`])
//! - [`builder`] — write-side accumulator ([`DataBuilder`])
//! - [`coerce`] — permissive primitive coercion shared by both sides
//! - [`datetime`] — timestamp/layout parsing and strftime formatting
//! - [`path`] — key-path conversions for lookups
//! - [`error`] — error types (only date-time parsing can fail)

pub mod builder;
pub mod coerce;
pub mod container;
pub mod datetime;
pub mod error;
pub mod path;

pub use builder::DataBuilder;
pub use container::{Container, DataContainer};
pub use error::{DataError, Result};
pub use path::Path;

// Re-exported so callers can construct and inspect values without a direct
// serde_json dependency.
pub use serde_json::{Map, Value};
