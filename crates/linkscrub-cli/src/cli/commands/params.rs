//! `linkscrub params` – print the tracking parameter set, sorted.

use anyhow::Result;
use linkscrub_core::config::LinkscrubConfig;

pub fn run_params(cfg: &LinkscrubConfig) -> Result<()> {
    for name in cfg.tracking_params().get_params() {
        println!("{name}");
    }
    Ok(())
}
