//! Lookup paths into nested mappings.
//!
//! A path is an ordered sequence of keys; a bare `&str` is a one-element
//! path. Getters accept anything implementing [`Path`], so these all work:
//!
//! ```rust
//! use datakit_core::{Container, DataContainer};
//! use serde_json::json;
//!
//! let c = DataContainer::new(json!({"a": {"b": 42}}));
//! assert_eq!(c.get_i64(["a", "b"], 0), 42);
//! assert_eq!(c.get_i64("b", 7), 7); // bare key, absent at the top level
//! ```

use std::{array, iter, slice, vec};

/// Conversion into an ordered sequence of lookup keys.
pub trait Path<'a> {
    type Keys: Iterator<Item = &'a str>;

    fn into_keys(self) -> Self::Keys;
}

impl<'a> Path<'a> for &'a str {
    type Keys = iter::Once<&'a str>;

    fn into_keys(self) -> Self::Keys {
        iter::once(self)
    }
}

impl<'a, const N: usize> Path<'a> for [&'a str; N] {
    type Keys = array::IntoIter<&'a str, N>;

    fn into_keys(self) -> Self::Keys {
        self.into_iter()
    }
}

impl<'a> Path<'a> for &'a [&'a str] {
    type Keys = iter::Copied<slice::Iter<'a, &'a str>>;

    fn into_keys(self) -> Self::Keys {
        self.iter().copied()
    }
}

impl<'a> Path<'a> for Vec<&'a str> {
    type Keys = vec::IntoIter<&'a str>;

    fn into_keys(self) -> Self::Keys {
        self.into_iter()
    }
}
