//! Same-site / external classification and relative/absolute forms.
//!
//! Invalid and relative URLs are never external: they count as same-site.

use super::{parse, ParsedUrl, RawUrl};

/// Host of a reference site given as a full URL (`https://mysite.com/blog`)
/// or a bare host (`mysite.com`, `mysite.com:8080/blog`). Lower-cased.
pub fn site_host_of(site: &str) -> String {
    parse_site(site).map(|p| p.host().to_string()).unwrap_or_default()
}

/// External iff `url` is valid, has a host, and that host differs from the
/// reference site's host.
pub fn is_external(url: &str, site_host: &str) -> bool {
    match parse(url) {
        Some(parsed) if !parsed.host().is_empty() => parsed.host() != site_host_of(site_host),
        _ => false,
    }
}

pub fn is_same_domain(url: &str, site_host: &str) -> bool {
    !is_external(url, site_host)
}

/// Turns a same-site URL into a root-relative path.
///
/// Scheme, host and the site's base path (when the site lives under a
/// subpath) are removed; query and fragment are kept. The result always
/// starts with `/`. External URLs, and URIs without a host, are returned
/// unchanged.
///
/// # Examples
///
/// - `make_relative("https://mysite.com/page?x=1", "https://mysite.com")` → `"/page?x=1"`
/// - `make_relative("https://mysite.com/blog/post", "https://mysite.com/blog")` → `"/post"`
pub fn make_relative(url: &str, site_base: &str) -> String {
    let trimmed = url.trim();
    let Some(parsed) = parse(trimmed) else {
        return ensure_leading_slash(trimmed);
    };
    if parsed.host().is_empty() || is_external(trimmed, site_base) {
        return url.to_string();
    }

    let base_path = site_base_path(site_base);
    let mut out = ensure_leading_slash(strip_base_path(parsed.path(), &base_path));
    let parts = RawUrl::split(trimmed);
    if let Some(query) = parts.query.filter(|q| !q.is_empty()) {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = parts.fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

/// Inverse of [`make_relative`]: joins a relative URL onto the site base
/// (including its base path). Valid absolute URLs pass through unchanged.
pub fn to_absolute(url: &str, site_base: &str) -> String {
    let trimmed = url.trim();
    if parse(trimmed).is_some() {
        return url.to_string();
    }
    let Some(site) = parse_site(site_base) else {
        return url.to_string();
    };
    if let Some(rest) = trimmed.strip_prefix("//") {
        return format!("{}://{}", site.scheme(), rest);
    }
    let mut base = format!("{}://{}", site.scheme(), site.host());
    if let Some(port) = site.port() {
        base.push_str(&format!(":{}", port));
    }
    base.push_str(site.path().trim_end_matches('/'));
    format!("{}/{}", base, trimmed.trim_start_matches('/'))
}

fn parse_site(site: &str) -> Option<ParsedUrl> {
    let site = site.trim();
    if site.is_empty() {
        return None;
    }
    // `mysite.com:8080` would otherwise parse as scheme `mysite.com`.
    if site.contains("://") {
        parse(site)
    } else {
        parse(&format!("https://{}", site.trim_start_matches('/')))
    }
}

fn site_base_path(site: &str) -> String {
    parse_site(site)
        .map(|p| p.path().trim_end_matches('/').to_string())
        .unwrap_or_default()
}

fn strip_base_path<'a>(path: &'a str, base: &str) -> &'a str {
    if base.is_empty() {
        return path;
    }
    match path.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
