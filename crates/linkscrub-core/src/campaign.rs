//! Campaign tagging: writing `utm_*` parameters onto outgoing links.

use crate::site::SiteContext;
use crate::url_model::{self, add_params, remove_params};

/// Campaign values to write. Empty optional values are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignTags {
    pub source: String,
    /// Falls back to [`default_medium`] when unset.
    pub medium: Option<String>,
    pub campaign: String,
    pub term: Option<String>,
    pub content: Option<String>,
}

impl CampaignTags {
    pub fn new(source: impl Into<String>, campaign: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            campaign: campaign.into(),
            ..Self::default()
        }
    }

    pub fn with_medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = Some(medium.into());
        self
    }
}

/// Medium label used when the caller gives none.
pub fn default_medium(site: &dyn SiteContext) -> &'static str {
    if site.is_admin() {
        "admin"
    } else {
        "website"
    }
}

/// Replaces the URL's campaign tags with `tags`.
///
/// Existing `utm_*` keys that are about to be written are removed first, so
/// re-tagging does not duplicate them. Other pairs keep their order; new
/// pairs follow in source, medium, campaign, term, content order. Invalid
/// URLs are returned unchanged.
pub fn tag_campaign(url: &str, tags: &CampaignTags, site: &dyn SiteContext) -> String {
    if !url_model::is_valid(url) {
        return url.to_string();
    }
    let medium = tags
        .medium
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| default_medium(site));

    let candidates = [
        ("utm_source", Some(tags.source.as_str())),
        ("utm_medium", Some(medium)),
        ("utm_campaign", Some(tags.campaign.as_str())),
        ("utm_term", tags.term.as_deref()),
        ("utm_content", tags.content.as_deref()),
    ];
    let pairs: Vec<(&str, &str)> = candidates
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value?.trim();
            (!value.is_empty()).then_some((key, value))
        })
        .collect();

    let keys: Vec<&str> = pairs.iter().map(|(key, _)| *key).collect();
    let cleaned = remove_params(url.trim(), &keys);
    add_params(&cleaned, pairs)
}
