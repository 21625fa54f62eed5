//! Permissive primitive coercion, shared by the accessor and the builder.
//!
//! Every function here is total: wrong-typed input never fails, it coerces.
//! The rules mirror classic dynamic-language casts so data coming out of a
//! sloppy API behaves predictably:
//!
//! - Truthiness: null, `false`, `0`, `0.0`, `""`, `"0"` and empty
//!   arrays/objects are false; everything else is true.
//! - Numeric parsing reads the longest numeric prefix of a string
//!   (`"12abc"` → 12, `"1.5e3x"` → 1500.0) and yields zero when there is
//!   none.
//! - Text rendering keeps integers and whole floats free of a trailing
//!   `.0`, renders `true` as `"1"` and `false` as `""`, and serializes
//!   arrays/objects as compact JSON.

use serde_json::Value;

/// Coerce any value to a boolean via truthiness.
pub fn to_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Coerce any value to an integer.
///
/// Floats truncate toward zero; strings parse their leading integer prefix;
/// arrays/objects collapse to 0 (empty) or 1 (non-empty).
pub fn to_i64(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(i64::MAX),
        Value::String(s) => leading_i64(s),
        Value::Array(items) => i64::from(!items.is_empty()),
        Value::Object(map) => i64::from(!map.is_empty()),
    }
}

/// Coerce any value to a float. Same shape as [`to_i64`], with a
/// leading-float prefix parse for strings.
pub fn to_f64(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => leading_f64(s),
        Value::Array(items) => f64::from(u8::from(!items.is_empty())),
        Value::Object(map) => f64::from(u8::from(!map.is_empty())),
    }
}

/// Coerce any value to text. Untrimmed; the accessor's `get_string` applies
/// its own trim on top of this.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                // f64 Display already drops the fraction for whole values.
                n.as_f64().unwrap_or(0.0).to_string()
            }
        }
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

/// Parse the leading integer prefix of a string: optional sign followed by
/// digits, after skipping leading whitespace. No digits means 0.
fn leading_i64(s: &str) -> i64 {
    let trimmed = s.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return 0;
    }
    // Overflowing prefixes saturate rather than wrap.
    trimmed[..end].parse::<i64>().unwrap_or(if trimmed.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Parse the leading float prefix of a string: sign, digits, optional
/// fraction, optional exponent. No digits means 0.0.
fn leading_f64(s: &str) -> f64 {
    let trimmed = s.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || has_digits {
            end = frac_end;
            has_digits = has_digits || frac_end > frac_start;
        }
    }
    if !has_digits {
        return 0.0;
    }
    // Exponent only counts when digits follow it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    trimmed[..end].parse::<f64>().unwrap_or(0.0)
}
