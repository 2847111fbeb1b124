//! Query-string pairs.
//!
//! Pairs keep their raw (still encoded) text so re-serializing an unchanged
//! pair reproduces it exactly. Names are decoded only for comparison.

use std::fmt;

/// One `key[=value]` segment of a query string, in raw form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPair {
    key: String,
    value: Option<String>,
}

impl QueryPair {
    /// Builds a pair from decoded text, percent-encoding both sides.
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: urlencoding::encode(key).into_owned(),
            value: Some(urlencoding::encode(value).into_owned()),
        }
    }

    /// Wraps an already-encoded segment without touching it.
    pub fn from_raw(segment: &str) -> Self {
        match segment.split_once('=') {
            Some((key, value)) => Self {
                key: key.to_string(),
                value: Some(value.to_string()),
            },
            None => Self {
                key: segment.to_string(),
                value: None,
            },
        }
    }

    pub fn raw_key(&self) -> &str {
        &self.key
    }

    pub fn raw_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Decoded key.
    pub fn name(&self) -> String {
        decode_component(&self.key)
    }

    /// Decoded value; empty when the segment had no `=`.
    pub fn value(&self) -> String {
        self.value.as_deref().map(decode_component).unwrap_or_default()
    }
}

impl fmt::Display for QueryPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => f.write_str(&self.key),
        }
    }
}

/// Splits a raw query string (without the leading `?`) into ordered pairs.
/// Empty segments (`a=1&&b=2`) are skipped; duplicates are kept.
pub fn parse_query(query: &str) -> Vec<QueryPair> {
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(QueryPair::from_raw)
        .collect()
}

pub fn serialize_query(pairs: &[QueryPair]) -> String {
    pairs
        .iter()
        .map(QueryPair::to_string)
        .collect::<Vec<_>>()
        .join("&")
}

/// Form-style decode (`+` is a space). Invalid UTF-8 falls back to the raw text.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_order_and_duplicates() {
        let pairs = parse_query("b=2&a=1&b=3");
        let names: Vec<String> = pairs.iter().map(QueryPair::name).collect();
        assert_eq!(names, ["b", "a", "b"]);
        assert_eq!(pairs[2].value(), "3");
    }

    #[test]
    fn flag_without_value_roundtrips() {
        let pairs = parse_query("debug&x=");
        assert_eq!(pairs[0].raw_value(), None);
        assert_eq!(pairs[1].raw_value(), Some(""));
        assert_eq!(serialize_query(&pairs), "debug&x=");
    }

    #[test]
    fn raw_encoding_is_preserved() {
        let pairs = parse_query("q=caf%C3%A9+au+lait&empty=&&z=a%3Db");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].value(), "café au lait");
        assert_eq!(pairs[2].value(), "a=b");
        assert_eq!(serialize_query(&pairs), "q=caf%C3%A9+au+lait&empty=&z=a%3Db");
    }

    #[test]
    fn value_with_equals_sign() {
        let pairs = parse_query("token=abc==");
        assert_eq!(pairs[0].name(), "token");
        assert_eq!(pairs[0].value(), "abc==");
    }

    #[test]
    fn new_encodes() {
        let pair = QueryPair::new("search term", "a&b");
        assert_eq!(pair.to_string(), "search%20term=a%26b");
        assert_eq!(pair.name(), "search term");
        assert_eq!(pair.value(), "a&b");
    }

    #[test]
    fn encoded_key_decodes_for_comparison() {
        let pairs = parse_query("utm%5Fsource=x");
        assert_eq!(pairs[0].name(), "utm_source");
    }
}
