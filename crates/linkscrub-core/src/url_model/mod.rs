//! URL modeling: parsing, projections, scheme and query rewriting.
//!
//! Validity is decided by the `url` crate. Components are cut from the raw
//! string, so whatever an operation leaves alone keeps its original
//! spelling. Invalid input never errors: `parse` returns `None` and the
//! projections return an empty string.

mod params;
mod query;
mod raw;
mod relative;
mod scheme;

use std::fmt;

pub use params::{add_params, remove_params};
pub use query::{parse_query, serialize_query, QueryPair};
pub use relative::{is_external, is_same_domain, make_relative, site_host_of, to_absolute};
pub use scheme::{add_scheme, to_http, to_https, Scheme, TargetScheme, UnsupportedScheme};

pub(crate) use raw::RawUrl;

/// A URL that passed the validity check, split into typed components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    scheme: Scheme,
    has_authority: bool,
    userinfo: Option<String>,
    host: String,
    port: Option<u16>,
    path: String,
    query: Vec<QueryPair>,
    fragment: Option<String>,
}

impl ParsedUrl {
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Lower-cased host; empty for URIs without an authority (`mailto:`).
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Path exactly as written; empty for `https://example.com`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[QueryPair] {
        &self.query
    }

    pub fn query_string(&self) -> String {
        serialize_query(&self.query)
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Lower-cased suffix of the last path segment, without the dot.
    pub fn extension(&self) -> String {
        let segment = self.path.rsplit('/').next().unwrap_or("");
        match segment.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => String::new(),
        }
    }

    pub fn is_secure(&self) -> bool {
        self.scheme == Scheme::Https
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme)?;
        if self.has_authority {
            f.write_str("//")?;
            if let Some(userinfo) = &self.userinfo {
                write!(f, "{}@", userinfo)?;
            }
            f.write_str(&self.host)?;
            if let Some(port) = self.port {
                write!(f, ":{}", port)?;
            }
        }
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query_string())?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

/// Loose "is this plausibly a URL" check used throughout the crate.
///
/// Requires a scheme, no embedded whitespace, and a non-empty host whenever
/// the URL has an authority part (always the case for http/https). Generic
/// URIs such as `mailto:` pass.
pub fn is_valid(raw: &str) -> bool {
    validate(raw).is_some()
}

/// Parses `raw` into components, or `None` if it fails [`is_valid`].
pub fn parse(raw: &str) -> Option<ParsedUrl> {
    let raw = raw.trim();
    let url = validate(raw)?;
    let parts = RawUrl::split(raw);

    let colon = parts.head.find(':')?;
    let after_scheme = &parts.head[colon + 1..];
    let (has_authority, path) = match after_scheme.strip_prefix("//") {
        Some(authority_and_path) => {
            let end = authority_and_path
                .find('/')
                .unwrap_or(authority_and_path.len());
            (true, &authority_and_path[end..])
        }
        None => (false, after_scheme),
    };

    let userinfo = if url.username().is_empty() {
        None
    } else {
        Some(match url.password() {
            Some(password) => format!("{}:{}", url.username(), password),
            None => url.username().to_string(),
        })
    };

    Some(ParsedUrl {
        scheme: Scheme::from_name(url.scheme()),
        has_authority,
        userinfo,
        host: url.host_str().unwrap_or("").to_ascii_lowercase(),
        port: url.port(),
        path: path.to_string(),
        query: parts.pairs(),
        fragment: parts.fragment.map(str::to_string),
    })
}

fn validate(raw: &str) -> Option<url::Url> {
    let raw = raw.trim();
    if raw.is_empty() || raw.chars().any(char::is_whitespace) {
        return None;
    }
    let url = url::Url::parse(raw).ok()?;
    let has_authority = raw
        .split_once(':')
        .map(|(_, rest)| rest.starts_with("//"))
        .unwrap_or(false);
    // `url` treats `\` as `/` for special schemes; the raw cut below does not.
    if has_authority && RawUrl::split(raw).head.contains('\\') {
        return None;
    }
    let host_missing = url.host_str().map_or(true, str::is_empty);
    if (has_authority || url.scheme() == "http" || url.scheme() == "https") && host_missing {
        return None;
    }
    if !has_authority && url.path().is_empty() {
        return None;
    }
    Some(url)
}

pub fn get_scheme(url: &str) -> String {
    parse(url)
        .map(|p| p.scheme().as_str().to_string())
        .unwrap_or_default()
}

pub fn get_domain(url: &str) -> String {
    parse(url).map(|p| p.host).unwrap_or_default()
}

pub fn get_path(url: &str) -> String {
    parse(url).map(|p| p.path).unwrap_or_default()
}

pub fn get_query(url: &str) -> String {
    parse(url).map(|p| p.query_string()).unwrap_or_default()
}

pub fn get_extension(url: &str) -> String {
    parse(url).map(|p| p.extension()).unwrap_or_default()
}

pub fn is_secure(url: &str) -> bool {
    parse(url).map_or(false, |p| p.is_secure())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(is_valid("https://example.com"));
        assert!(is_valid("http://localhost:8080/x"));
        assert!(is_valid("mailto:someone@example.com"));
        assert!(is_valid("ftp://files.example.com/pub"));
        assert!(!is_valid("invalid-url"));
        assert!(!is_valid("example.com"));
        assert!(!is_valid(""));
        assert!(!is_valid("https://"));
        assert!(!is_valid("https://exa mple.com"));
        assert!(!is_valid("/relative/path"));
        assert!(!is_valid("custom://"));
    }

    #[test]
    fn parse_components() {
        let p = parse("https://User:pw@Example.COM:8443/a/b.PNG?x=1&y=2#frag").unwrap();
        assert_eq!(p.scheme(), &Scheme::Https);
        assert_eq!(p.host(), "example.com");
        assert_eq!(p.port(), Some(8443));
        assert_eq!(p.path(), "/a/b.PNG");
        assert_eq!(p.query_string(), "x=1&y=2");
        assert_eq!(p.fragment(), Some("frag"));
        assert_eq!(p.extension(), "png");
    }

    #[test]
    fn parse_invalid_is_none() {
        assert!(parse("not a url").is_none());
        assert!(parse("invalid-url").is_none());
    }

    #[test]
    fn backslash_in_authority_url_is_invalid() {
        assert!(parse("https://example.com\\path").is_none());
        assert!(!is_valid("https://mysite.com\\x?a=1"));
        let p = parse("https://example.com/p?q=a\\b").unwrap();
        assert_eq!(p.path(), "/p");
    }

    #[test]
    fn display_reproduces_url() {
        for raw in [
            "https://example.com",
            "https://example.com/page?b=2&a=1&b=3#x",
            "http://user@example.com:81/",
            "mailto:someone@example.com",
        ] {
            let p = parse(raw).unwrap();
            assert_eq!(p.to_string(), raw);
            assert_eq!(parse(&p.to_string()).unwrap(), p);
        }
    }

    #[test]
    fn projections_on_missing_parts() {
        assert_eq!(get_domain("https://example.com"), "example.com");
        assert_eq!(get_path("https://example.com"), "");
        assert_eq!(get_query("https://example.com/a"), "");
        assert_eq!(get_extension("https://example.com/"), "");
        assert_eq!(get_extension("https://example.com/dir.v2/file"), "");
        assert_eq!(get_domain("garbage"), "");
        assert_eq!(get_scheme("garbage"), "");
    }

    #[test]
    fn extension_ignores_query() {
        assert_eq!(get_extension("https://example.com/photo.JPG?size=large.png"), "jpg");
        assert_eq!(get_extension("https://example.com/archive.tar.gz"), "gz");
    }

    #[test]
    fn mailto_has_no_host() {
        let p = parse("mailto:someone@example.com").unwrap();
        assert_eq!(p.host(), "");
        assert_eq!(p.path(), "someone@example.com");
    }

    #[test]
    fn secure() {
        assert!(is_secure("https://example.com"));
        assert!(!is_secure("http://example.com"));
        assert!(!is_secure("nope"));
    }
}
