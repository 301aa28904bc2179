//! # Map Parsing
//!
//! `key1=value1,key2=value2` style values.
//!
//! Pairs are split like list elements (empty tokens dropped). A pair that
//! does not split into exactly a key and a value rejects the whole map; a pair
//! with an empty key is skipped; a later duplicate key overwrites an earlier
//! one.

use std::collections::HashMap;

use crate::list::{or_default, split_tokens};

/// Key-value separator used when the caller passes an empty one.
pub const DEFAULT_KV_SEPARATOR: &str = "=";

/// Parse `raw` into a map, converting values with `parse`.
///
/// Empty values are stored as `T::default()` instead of being passed to
/// `parse`: `""` for strings, zero for numbers. `None` if the value holds no
/// usable pair, if a pair is malformed, or if any value fails to parse.
pub fn parse_map<T: Default>(
    raw: &str,
    sep: &str,
    kv_sep: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<HashMap<String, T>> {
    let kv_sep = or_default(kv_sep, DEFAULT_KV_SEPARATOR);
    let pairs = split_tokens(raw, sep);
    if pairs.is_empty() {
        return None;
    }

    let mut map = HashMap::with_capacity(pairs.len());
    for pair in pairs {
        let mut parts = pair.split(kv_sep);
        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return None;
        };

        if key.is_empty() {
            continue;
        }

        let value = if value.is_empty() { T::default() } else { parse(value)? };
        map.insert(key.to_string(), value);
    }

    if map.is_empty() { None } else { Some(map) }
}
