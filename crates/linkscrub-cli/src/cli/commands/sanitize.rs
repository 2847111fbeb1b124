//! `linkscrub sanitize` – validate, strip and dedupe a URL list.

use anyhow::Result;
use linkscrub_core::config::LinkscrubConfig;
use std::path::Path;

use super::input::read_urls;

pub fn run_sanitize(
    cfg: &LinkscrubConfig,
    input: Option<&Path>,
    custom: &[String],
    keep: &[String],
) -> Result<()> {
    let urls = read_urls(input)?;
    let params = cfg.tracking_params();
    let policy = cfg.removal_policy().with_custom(custom).with_keep(keep);
    let clean = params.sanitize(&urls, &policy);
    tracing::info!(read = urls.len(), kept = clean.len(), "sanitize");
    for url in clean {
        println!("{url}");
    }
    Ok(())
}
