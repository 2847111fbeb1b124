//! `linkscrub extract [file]` – list URLs found in text.

use anyhow::Result;
use linkscrub_core::bulk;
use std::path::Path;

use super::input::read_text;

pub fn run_extract(file: Option<&Path>) -> Result<()> {
    let text = read_text(file)?;
    for url in bulk::extract(&text) {
        println!("{url}");
    }
    Ok(())
}
