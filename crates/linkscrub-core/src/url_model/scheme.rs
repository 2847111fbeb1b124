//! Scheme model and rewriting.

use std::fmt;
use std::str::FromStr;

/// URL scheme as far as this crate cares: web schemes are distinguished,
/// everything else is carried by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scheme {
    Http,
    Https,
    Other(String),
}

impl Scheme {
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            _ => Scheme::Other(lower),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
            Scheme::Other(name) => name,
        }
    }

    pub fn is_web(&self) -> bool {
        matches!(self, Scheme::Http | Scheme::Https)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheme that `add_scheme` may write. Only the two web schemes qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetScheme {
    Http,
    #[default]
    Https,
}

impl TargetScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetScheme::Http => "http",
            TargetScheme::Https => "https",
        }
    }

    /// Parses a requested scheme, falling back to `https` for anything unsupported.
    pub fn from_request(requested: &str) -> Self {
        requested.parse().unwrap_or_else(|_| {
            tracing::debug!(requested, "unsupported target scheme, using https");
            TargetScheme::Https
        })
    }
}

impl FromStr for TargetScheme {
    type Err = UnsupportedScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(TargetScheme::Http),
            "https" => Ok(TargetScheme::Https),
            _ => Err(UnsupportedScheme(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported target scheme: {0}")]
pub struct UnsupportedScheme(pub String);

/// Puts `scheme` on `url`.
///
/// An existing `http://` / `https://` prefix is replaced; anything else gets
/// `scheme://` prepended (a protocol-relative `//host` only gets `scheme:`).
/// Requests for schemes other than http/https silently become https.
///
/// # Examples
///
/// - `add_scheme("example.com", "http")` → `"http://example.com"`
/// - `add_scheme("http://example.com", "ftp")` → `"https://example.com"`
pub fn add_scheme(url: &str, scheme: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }
    let target = TargetScheme::from_request(scheme);
    let rest = strip_web_scheme(url)
        .or_else(|| url.strip_prefix("//"))
        .unwrap_or(url);
    format!("{}://{}", target.as_str(), rest)
}

pub fn to_https(url: &str) -> String {
    add_scheme(url, "https")
}

pub fn to_http(url: &str) -> String {
    add_scheme(url, "http")
}

fn strip_web_scheme(url: &str) -> Option<&str> {
    ["https://", "http://"].iter().find_map(|prefix| {
        let head = url.get(..prefix.len())?;
        if head.eq_ignore_ascii_case(prefix) {
            url.get(prefix.len()..)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepends_to_bare_domain() {
        assert_eq!(add_scheme("example.com", "https"), "https://example.com");
        assert_eq!(add_scheme("example.com/a?b=1", "http"), "http://example.com/a?b=1");
    }

    #[test]
    fn replaces_existing_web_scheme() {
        assert_eq!(add_scheme("http://example.com", "https"), "https://example.com");
        assert_eq!(add_scheme("HTTPS://example.com/x", "http"), "http://example.com/x");
    }

    #[test]
    fn unsupported_request_falls_back_to_https() {
        assert_eq!(add_scheme("example.com", "ftp"), "https://example.com");
        assert_eq!(add_scheme("http://example.com", "gopher"), "https://example.com");
        assert_eq!(TargetScheme::from_request(""), TargetScheme::Https);
    }

    #[test]
    fn protocol_relative() {
        assert_eq!(add_scheme("//cdn.example.com/a.js", "https"), "https://cdn.example.com/a.js");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(add_scheme("   ", "https"), "");
    }

    #[test]
    fn scheme_is_overwritable() {
        for url in ["http://example.com/a?x=1", "https://example.com/", "example.com"] {
            assert_eq!(to_http(&to_https(url)), to_http(url));
            assert_eq!(to_https(&to_https(url)), to_https(url));
        }
    }

    #[test]
    fn scheme_from_name() {
        assert_eq!(Scheme::from_name("HTTPS"), Scheme::Https);
        assert_eq!(Scheme::from_name("mailto"), Scheme::Other("mailto".into()));
        assert!(!Scheme::from_name("ftp").is_web());
    }
}
