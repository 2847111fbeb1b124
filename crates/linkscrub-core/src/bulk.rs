//! List operations: extraction from free text, dedupe, filtering, domains.
//!
//! Every element is handled independently. Output order follows input
//! order except for [`get_domains`], which returns a sorted set.

use std::collections::{BTreeSet, HashSet};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify::{has_media_extension, MediaExtensions, MediaKind, PlatformAxis, PlatformClassifier};
use crate::url_model::{self, is_external, Scheme};

static URL_CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[A-Za-z][A-Za-z0-9+.\-]*://[^\s<>"'`]+"#).expect("url candidate regex is valid")
});

/// Characters that end a sentence rather than a URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Finds `scheme://...` substrings in `text`, keeping valid ones.
///
/// Trailing sentence punctuation and unbalanced closing brackets are not
/// part of the match. Duplicates collapse to their first occurrence.
pub fn extract(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for m in URL_CANDIDATE.find_iter(text) {
        let candidate = trim_trailing(m.as_str());
        if !url_model::is_valid(candidate) || !seen.insert(candidate) {
            continue;
        }
        out.push(candidate.to_string());
    }
    tracing::debug!(found = out.len(), "extracted urls from text");
    out
}

fn trim_trailing(mut s: &str) -> &str {
    loop {
        let before = s.len();
        s = s.trim_end_matches(TRAILING_PUNCTUATION);
        for (open, close) in [('(', ')'), ('[', ']'), ('{', '}')] {
            if s.ends_with(close) && s.matches(close).count() > s.matches(open).count() {
                s = &s[..s.len() - 1];
            }
        }
        if s.len() == before {
            return s;
        }
    }
}

/// Trims each entry and drops repeats; first occurrence wins.
pub fn remove_duplicates<S: AsRef<str>>(urls: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.iter()
        .map(|u| u.as_ref().trim())
        .filter(|u| seen.insert(*u))
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Same host as the site, or relative.
    Internal,
    External,
}

impl FromStr for Location {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "internal" => Ok(Location::Internal),
            "external" => Ok(Location::External),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl FromStr for Protocol {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    Image,
    /// Video file extension or video platform.
    Video,
    /// Audio file extension or audio platform.
    Audio,
    Document,
    Social,
}

impl FromStr for LinkType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Ok(LinkType::Image),
            "video" => Ok(LinkType::Video),
            "audio" => Ok(LinkType::Audio),
            "document" => Ok(LinkType::Document),
            "social" => Ok(LinkType::Social),
            _ => Err(()),
        }
    }
}

impl LinkType {
    pub fn matches(self, url: &str, extensions: &MediaExtensions, platforms: &PlatformClassifier) -> bool {
        let ext = |kind: MediaKind| has_media_extension(url, kind, Some(extensions.get(kind)));
        match self {
            LinkType::Image => ext(MediaKind::Image),
            LinkType::Video => ext(MediaKind::Video) || platforms.matches(url, PlatformAxis::Video),
            LinkType::Audio => ext(MediaKind::Audio) || platforms.matches(url, PlatformAxis::Audio),
            LinkType::Document => ext(MediaKind::Document),
            LinkType::Social => platforms.matches(url, PlatformAxis::Social),
        }
    }
}

fn select<S, F>(urls: &[S], keep: F) -> Vec<String>
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    urls.iter()
        .map(AsRef::as_ref)
        .filter(|u| keep(u))
        .map(str::to_string)
        .collect()
}

/// Keeps URLs on (`internal`) or off (`external`) `site_host`.
/// Unknown selectors give an empty list.
pub fn filter_by_location<S: AsRef<str>>(urls: &[S], selector: &str, site_host: &str) -> Vec<String> {
    let Ok(location) = selector.parse::<Location>() else {
        tracing::debug!(selector, "unknown location selector");
        return Vec::new();
    };
    select(urls, |u| is_external(u, site_host) == (location == Location::External))
}

/// Keeps URLs whose scheme is `http` or `https`. Unknown selectors give an empty list.
pub fn filter_by_protocol<S: AsRef<str>>(urls: &[S], selector: &str) -> Vec<String> {
    let Ok(protocol) = selector.parse::<Protocol>() else {
        tracing::debug!(selector, "unknown protocol selector");
        return Vec::new();
    };
    let wanted = match protocol {
        Protocol::Http => Scheme::Http,
        Protocol::Https => Scheme::Https,
    };
    select(urls, |u| url_model::parse(u).is_some_and(|p| *p.scheme() == wanted))
}

/// Keeps URLs of the given link type using the built-in extension sets and platform tables.
pub fn filter_by_type<S: AsRef<str>>(urls: &[S], selector: &str) -> Vec<String> {
    filter_by_type_with(urls, selector, &MediaExtensions::default(), PlatformClassifier::builtin())
}

pub fn filter_by_type_with<S: AsRef<str>>(
    urls: &[S],
    selector: &str,
    extensions: &MediaExtensions,
    platforms: &PlatformClassifier,
) -> Vec<String> {
    let Ok(link_type) = selector.parse::<LinkType>() else {
        tracing::debug!(selector, "unknown type selector");
        return Vec::new();
    };
    select(urls, |u| link_type.matches(u, extensions, platforms))
}

/// Distinct hosts of the valid URLs, sorted.
pub fn get_domains<S: AsRef<str>>(urls: &[S]) -> Vec<String> {
    urls.iter()
        .map(|u| url_model::get_domain(u.as_ref()))
        .filter(|host| !host.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
