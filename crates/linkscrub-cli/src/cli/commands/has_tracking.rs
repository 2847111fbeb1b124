//! `linkscrub has-tracking <url>`

use anyhow::Result;
use linkscrub_core::config::LinkscrubConfig;

pub fn run_has_tracking(cfg: &LinkscrubConfig, url: &str) -> Result<()> {
    let tracked = cfg.tracking_params().has_tracking(url);
    println!("{}", if tracked { "yes" } else { "no" });
    Ok(())
}
