//! Error types for datakit-core operations.
//!
//! Almost everything in this crate is total: absence falls back to defaults
//! and coercion is permissive. The one loud failure is malformed date-time
//! text on the read side, which is surfaced here instead of being silently
//! coerced into a wrong instant.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    /// The text at the requested path was neither a Unix timestamp nor a
    /// recognized date-time layout.
    #[error("Invalid date-time text: {0:?}")]
    InvalidDateTime(String),

    /// A numeric timestamp outside the range chrono can represent.
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, DataError>;
