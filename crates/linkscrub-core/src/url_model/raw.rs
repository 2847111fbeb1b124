//! Raw split of a URL string at `?` and `#`.

use super::query::{parse_query, serialize_query, QueryPair};

/// Borrowed view of a URL string cut into head, query and fragment.
///
/// `head` is everything before the query (scheme, authority, path). It is
/// never re-encoded, so parts an operation does not touch keep their
/// original spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawUrl<'a> {
    pub head: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> RawUrl<'a> {
    pub fn split(raw: &'a str) -> Self {
        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (raw, None),
        };
        let (head, query) = match rest.split_once('?') {
            Some((head, query)) => (head, Some(query)),
            None => (rest, None),
        };
        Self {
            head,
            query,
            fragment,
        }
    }

    pub fn pairs(&self) -> Vec<QueryPair> {
        self.query.map(parse_query).unwrap_or_default()
    }

    /// Reassembles the URL around a replacement query.
    /// An empty pair list drops the `?` entirely.
    pub fn with_pairs(&self, pairs: &[QueryPair]) -> String {
        let mut out = String::with_capacity(self.head.len() + 64);
        out.push_str(self.head);
        if !pairs.is_empty() {
            out.push('?');
            out.push_str(&serialize_query(pairs));
        }
        if let Some(fragment) = self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}
