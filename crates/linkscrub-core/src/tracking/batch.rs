//! Collection forms of `strip`.
//!
//! `strip_multiple` maps element-wise and passes invalid entries through;
//! `sanitize` drops them. Keep the two apart.

use std::collections::HashSet;

use super::{strip_with, RemovalPolicy, TrackingParams};
use crate::url_model;

impl TrackingParams {
    /// Element-wise [`TrackingParams::strip`]: same length, same order,
    /// invalid entries unchanged.
    pub fn strip_multiple<S: AsRef<str>>(&self, urls: &[S], policy: &RemovalPolicy) -> Vec<String> {
        let removal = self.removal(policy);
        urls.iter()
            .map(|url| strip_with(&removal, url.as_ref()))
            .collect()
    }

    /// Validate, strip, then dedupe by exact string (first occurrence wins).
    ///
    /// # Examples
    ///
    /// `["https://example.com?utm_source=test", "invalid-url", "https://example.com"]`
    /// → `["https://example.com"]`
    pub fn sanitize<S: AsRef<str>>(&self, urls: &[S], policy: &RemovalPolicy) -> Vec<String> {
        let removal = self.removal(policy);
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let mut invalid = 0usize;
        for url in urls {
            let url = url.as_ref().trim();
            if !url_model::is_valid(url) {
                invalid += 1;
                continue;
            }
            let stripped = strip_with(&removal, url);
            if seen.insert(stripped.clone()) {
                out.push(stripped);
            }
        }
        tracing::debug!(
            input = urls.len(),
            invalid,
            output = out.len(),
            "sanitized url list"
        );
        out
    }
}
