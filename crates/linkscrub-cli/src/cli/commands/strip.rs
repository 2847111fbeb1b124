//! `linkscrub strip <url>...` – remove tracking parameters.

use anyhow::Result;
use linkscrub_core::config::LinkscrubConfig;

pub fn run_strip(cfg: &LinkscrubConfig, urls: &[String], custom: &[String], keep: &[String]) -> Result<()> {
    let params = cfg.tracking_params();
    let policy = cfg.removal_policy().with_custom(custom).with_keep(keep);
    for url in params.strip_multiple(urls, &policy) {
        println!("{url}");
    }
    Ok(())
}
