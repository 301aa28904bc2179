//! # List Parsing
//!
//! Splits a raw value into an ordered list. Empty tokens are dropped, so
//! `"a,,b,"` is `["a", "b"]` and `",,"` is no list at all. Elements are parsed
//! all-or-nothing: one bad element rejects the whole value.

/// Element separator used when the caller passes an empty one.
pub const DEFAULT_SEPARATOR: &str = ",";

pub(crate) fn or_default<'a>(sep: &'a str, default: &'a str) -> &'a str {
    if sep.is_empty() { default } else { sep }
}

/// Non-empty tokens of `raw`, in order.
pub fn split_tokens<'a>(raw: &'a str, sep: &str) -> Vec<&'a str> {
    raw.split(or_default(sep, DEFAULT_SEPARATOR))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parse every token with `parse`.
///
/// `None` if no token survives filtering or if any token fails to parse.
pub fn parse_list<T>(
    raw: &str,
    sep: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<Vec<T>> {
    let tokens = split_tokens(raw, sep);
    if tokens.is_empty() {
        return None;
    }
    tokens.into_iter().map(parse).collect()
}
