//! Host-identity context: which site the caller is running as.
//!
//! The core only needs the site host (same-site / external decisions) and,
//! for campaign tagging, whether the current view is an admin screen.

use crate::url_model::site_host_of;

pub trait SiteContext {
    /// Lower-cased host of the current site.
    fn current_site_host(&self) -> String;

    /// URL of the page being rendered, or empty when unknown.
    fn current_page_url(&self) -> String;

    /// Whether the current view is an administrative screen.
    fn is_admin(&self) -> bool {
        false
    }
}

/// Fixed site context, typically built from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSite {
    base_url: String,
    page_url: String,
    admin: bool,
}

impl StaticSite {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_page_url(mut self, page_url: impl Into<String>) -> Self {
        self.page_url = page_url.into();
        self
    }

    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl SiteContext for StaticSite {
    fn current_site_host(&self) -> String {
        site_host_of(&self.base_url)
    }

    fn current_page_url(&self) -> String {
        self.page_url.clone()
    }

    fn is_admin(&self) -> bool {
        self.admin
    }
}
