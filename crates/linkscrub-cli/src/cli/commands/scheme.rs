//! `linkscrub scheme <url>... [--scheme S]`

use anyhow::Result;
use linkscrub_core::config::LinkscrubConfig;
use linkscrub_core::url_model::{add_scheme, TargetScheme};

/// `--scheme`, else `default_scheme` from config. Unsupported names become https.
fn target(cfg: &LinkscrubConfig, requested: Option<&str>) -> TargetScheme {
    requested
        .map(TargetScheme::from_request)
        .unwrap_or_else(|| cfg.target_scheme())
}

pub fn run_scheme(cfg: &LinkscrubConfig, urls: &[String], requested: Option<&str>) -> Result<()> {
    let scheme = target(cfg, requested);
    for url in urls {
        println!("{}", add_scheme(url, scheme.as_str()));
    }
    Ok(())
}
