//! Tracking parameter stripping.
//!
//! The global tracked set lives in a [`TrackingParams`] value owned by the
//! caller and shared by reference (usually behind an `Arc`). Reads take a
//! read lock; [`TrackingParams::extend`] is the only writer and names can
//! never be removed.
//!
//! Every `strip` call evaluates `(global ∪ custom) − keep` against the
//! query keys. `keep` always wins. `has_tracking` looks at the global set
//! only and ignores per-call policy.

mod batch;
mod defaults;

pub use defaults::DEFAULT_TRACKING_PARAMS;

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::url_model::{self, QueryPair, RawUrl};

/// Per-call overrides for [`TrackingParams::strip`]. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalPolicy {
    /// Extra names removed for this call only.
    pub custom: Vec<String>,
    /// Names never removed in this call, even when tracked or listed in `custom`.
    pub keep: Vec<String>,
}

impl RemovalPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_custom<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_keep<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep.extend(names.into_iter().map(Into::into));
        self
    }
}

/// Canonical form used for every comparison: trimmed, ASCII lower-case.
pub fn canonical_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Process-wide tracked parameter set.
#[derive(Debug)]
pub struct TrackingParams {
    names: RwLock<HashSet<String>>,
}

impl Default for TrackingParams {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl TrackingParams {
    /// An empty set. Mostly useful in tests.
    pub fn empty() -> Self {
        Self {
            names: RwLock::new(HashSet::new()),
        }
    }

    /// The built-in table ([`DEFAULT_TRACKING_PARAMS`]).
    pub fn with_defaults() -> Self {
        let params = Self::empty();
        params.extend(DEFAULT_TRACKING_PARAMS.iter().copied());
        params
    }

    /// Unions `names` into the global set. Duplicates and blanks are ignored.
    /// Returns how many names were new.
    pub fn extend<I, S>(&self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = self.names.write().unwrap_or_else(PoisonError::into_inner);
        let before = set.len();
        for name in names {
            let name = canonical_name(name.as_ref());
            if !name.is_empty() {
                set.insert(name);
            }
        }
        let added = set.len() - before;
        if added > 0 {
            tracing::debug!(added, total = set.len(), "extended tracking parameter set");
        }
        added
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains(&canonical_name(name))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Sorted snapshot of the global set.
    pub fn get_params(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().iter().cloned().collect();
        names.sort();
        names
    }

    /// The canonical removal set a `strip` call with `policy` would use.
    pub fn removal_set(&self, policy: &RemovalPolicy) -> HashSet<String> {
        let removal = self.removal(policy);
        removal
            .global
            .iter()
            .chain(removal.custom.iter())
            .filter(|name| !removal.keep.contains(*name))
            .cloned()
            .collect()
    }

    /// Removes every query pair whose key is in `(global ∪ custom) − keep`.
    ///
    /// Invalid URLs, and URLs where nothing matches, are returned unchanged.
    /// Remaining pairs keep their order, values and encoding; scheme, host,
    /// path and fragment are untouched. Stripping is idempotent.
    ///
    /// # Examples
    ///
    /// `strip("https://example.com/page?utm_source=facebook&fbclid=abc123&product_id=789")`
    /// → `"https://example.com/page?product_id=789"`
    pub fn strip(&self, url: &str, policy: &RemovalPolicy) -> String {
        strip_with(&self.removal(policy), url)
    }

    /// True iff `url` is valid and carries at least one key from the global set.
    pub fn has_tracking(&self, url: &str) -> bool {
        if !url_model::is_valid(url) {
            return false;
        }
        let raw = RawUrl::split(url.trim());
        let global = self.read();
        raw.pairs()
            .iter()
            .any(|pair| global.contains(&canonical_name(&pair.name())))
    }

    fn read(&self) -> RwLockReadGuard<'_, HashSet<String>> {
        self.names.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn removal(&self, policy: &RemovalPolicy) -> Removal<'_> {
        Removal {
            global: self.read(),
            custom: canonical_set(&policy.custom),
            keep: canonical_set(&policy.keep),
        }
    }
}

/// Effective removal rule for one call (or one batch), holding the read lock.
struct Removal<'a> {
    global: RwLockReadGuard<'a, HashSet<String>>,
    custom: HashSet<String>,
    keep: HashSet<String>,
}

impl Removal<'_> {
    fn removes(&self, name: &str) -> bool {
        !self.keep.contains(name) && (self.global.contains(name) || self.custom.contains(name))
    }
}

fn canonical_set(names: &[String]) -> HashSet<String> {
    names
        .iter()
        .map(|n| canonical_name(n))
        .filter(|n| !n.is_empty())
        .collect()
}

fn strip_with(removal: &Removal<'_>, url: &str) -> String {
    if !url_model::is_valid(url) {
        return url.to_string();
    }
    let raw = RawUrl::split(url.trim());
    let pairs = raw.pairs();
    let kept: Vec<QueryPair> = pairs
        .iter()
        .filter(|pair| !removal.removes(&canonical_name(&pair.name())))
        .cloned()
        .collect();
    if kept.len() == pairs.len() {
        return url.to_string();
    }
    tracing::trace!(removed = pairs.len() - kept.len(), "stripped tracking parameters");
    raw.with_pairs(&kept)
}
