//! Appending and removing query pairs.
//!
//! Both operate on the raw string, so they also work on relative URLs.
//! Existing pairs keep their order and encoding.

use super::{QueryPair, RawUrl};

/// Appends `pairs` after the existing query, before any fragment.
///
/// Keys that already exist are not replaced; both instances are kept.
/// Remove first with [`remove_params`] to overwrite.
pub fn add_params<I, K, V>(url: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let raw = RawUrl::split(url);
    let mut merged = raw.pairs();
    let before = merged.len();
    merged.extend(
        pairs
            .into_iter()
            .map(|(k, v)| QueryPair::new(k.as_ref(), v.as_ref())),
    );
    if merged.len() == before {
        return url.to_string();
    }
    raw.with_pairs(&merged)
}

/// Drops every pair whose decoded key equals one of `names`, ignoring
/// surrounding whitespace and ASCII case. Returns `url` untouched when
/// nothing matched.
pub fn remove_params<S: AsRef<str>>(url: &str, names: &[S]) -> String {
    let raw = RawUrl::split(url);
    let pairs = raw.pairs();
    let kept: Vec<QueryPair> = pairs
        .iter()
        .filter(|pair| {
            let name = pair.name();
            !names
                .iter()
                .any(|n| n.as_ref().trim().eq_ignore_ascii_case(name.trim()))
        })
        .cloned()
        .collect();
    if kept.len() == pairs.len() {
        return url.to_string();
    }
    raw.with_pairs(&kept)
}
