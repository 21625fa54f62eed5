//! Date-time parsing and formatting helpers.
//!
//! The specifier mini-language on both sides is chrono's strftime: the
//! fallback layouts below are strftime patterns, and `set_datetime`'s format
//! parameter is handed to the same formatter.

use chrono::format::strftime::StrftimeItems;
use chrono::format::Item;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{DataError, Result};

/// Free-form layouts tried after RFC 3339, in order. All are interpreted
/// as UTC.
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
];

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y"];

/// Parse date-time text.
///
/// Text that is a canonical base-10 integer (it round-trips through `i64`,
/// so `"007"` or `"+7"` do not qualify) is a Unix timestamp in seconds.
/// Anything else is tried as RFC 3339, then as each of the common layouts
/// above. Unparseable text is the one loud failure in this crate.
pub fn parse(text: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = text.parse::<i64>() {
        if ts.to_string() == text {
            return Utc
                .timestamp_opt(ts, 0)
                .single()
                .ok_or(DataError::TimestampOutOfRange(ts));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    for layout in DATETIME_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, layout) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(text, layout) {
            if let Some(naive) = date.and_hms_opt(0, 0, 0) {
                return Ok(Utc.from_utc_datetime(&naive));
            }
        }
    }

    Err(DataError::InvalidDateTime(text.to_string()))
}

/// Format an instant with a strftime specifier.
///
/// Returns `None` when the specifier itself is malformed, so callers on the
/// builder side can treat a bad format as "nothing to set" instead of
/// panicking inside `Display`.
pub fn format(instant: &DateTime<Utc>, spec: &str) -> Option<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(spec).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }
    Some(instant.format_with_items(items.into_iter()).to_string())
}
