//! `linkscrub filter` – keep URLs matching location, protocol and type selectors.
//!
//! Selectors combine with AND. An unknown selector value matches nothing.

use anyhow::Result;
use linkscrub_core::bulk;
use linkscrub_core::classify::PlatformClassifier;
use linkscrub_core::config::LinkscrubConfig;
use linkscrub_core::url_model::site_host_of;
use std::path::Path;

use super::input::read_urls;
use super::relative::site_base;

#[derive(Debug, Default)]
pub struct FilterArgs {
    pub location: Option<String>,
    pub protocol: Option<String>,
    pub link_type: Option<String>,
    pub site: Option<String>,
}

fn apply(cfg: &LinkscrubConfig, args: &FilterArgs, mut urls: Vec<String>) -> Result<Vec<String>> {
    if let Some(location) = &args.location {
        let host = site_host_of(site_base(cfg, args.site.as_deref())?);
        urls = bulk::filter_by_location(&urls, location, &host);
    }
    if let Some(protocol) = &args.protocol {
        urls = bulk::filter_by_protocol(&urls, protocol);
    }
    if let Some(link_type) = &args.link_type {
        urls = bulk::filter_by_type_with(
            &urls,
            link_type,
            &cfg.media_extensions(),
            PlatformClassifier::builtin(),
        );
    }
    Ok(urls)
}

pub fn run_filter(cfg: &LinkscrubConfig, args: &FilterArgs, input: Option<&Path>) -> Result<()> {
    let urls = read_urls(input)?;
    for url in apply(cfg, args, urls)? {
        println!("{url}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> Vec<String> {
        [
            "https://mysite.com/a.png",
            "http://mysite.com/b.png",
            "https://cdn.other.com/c.png",
            "https://youtu.be/xyz",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn selectors_combine() {
        let args = FilterArgs {
            location: Some("internal".into()),
            protocol: Some("https".into()),
            site: Some("https://mysite.com".into()),
            ..FilterArgs::default()
        };
        let out = apply(&LinkscrubConfig::default(), &args, urls()).unwrap();
        assert_eq!(out, vec!["https://mysite.com/a.png"]);
    }

    #[test]
    fn type_only() {
        let args = FilterArgs {
            link_type: Some("video".into()),
            ..FilterArgs::default()
        };
        let out = apply(&LinkscrubConfig::default(), &args, urls()).unwrap();
        assert_eq!(out, vec!["https://youtu.be/xyz"]);
    }

    #[test]
    fn location_needs_a_site() {
        let args = FilterArgs {
            location: Some("external".into()),
            ..FilterArgs::default()
        };
        assert!(apply(&LinkscrubConfig::default(), &args, urls()).is_err());
    }

    #[test]
    fn unknown_selector_matches_nothing() {
        let args = FilterArgs {
            protocol: Some("gopher".into()),
            ..FilterArgs::default()
        };
        assert!(apply(&LinkscrubConfig::default(), &args, urls()).unwrap().is_empty());
    }
}
