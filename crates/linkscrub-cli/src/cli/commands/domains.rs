//! `linkscrub domains` – distinct hosts, sorted.

use anyhow::Result;
use linkscrub_core::bulk;
use std::path::Path;

use super::input::read_urls;

pub fn run_domains(input: Option<&Path>) -> Result<()> {
    let urls = read_urls(input)?;
    for domain in bulk::get_domains(&urls) {
        println!("{domain}");
    }
    Ok(())
}
