//! `linkscrub relative <url> [--site URL]`

use anyhow::{Context, Result};
use linkscrub_core::config::LinkscrubConfig;
use linkscrub_core::url_model::make_relative;

/// `--site`, else `site_url` from config.
pub(super) fn site_base<'a>(cfg: &'a LinkscrubConfig, site: Option<&'a str>) -> Result<&'a str> {
    site.or(cfg.site_url.as_deref())
        .filter(|s| !s.trim().is_empty())
        .context("no site given; pass --site or set site_url in the config")
}

pub fn run_relative(cfg: &LinkscrubConfig, url: &str, site: Option<&str>) -> Result<()> {
    let base = site_base(cfg, site)?;
    println!("{}", make_relative(url, base));
    Ok(())
}
