//! `linkscrub tag <url> --source S --campaign C` – add campaign parameters.

use anyhow::Result;
use linkscrub_core::campaign::{tag_campaign, CampaignTags};
use linkscrub_core::config::LinkscrubConfig;

#[derive(Debug)]
pub struct TagArgs {
    pub source: String,
    pub campaign: String,
    pub medium: Option<String>,
    pub term: Option<String>,
    pub content: Option<String>,
    pub admin: bool,
}

pub fn run_tag(cfg: &LinkscrubConfig, url: &str, args: TagArgs) -> Result<()> {
    let site = cfg.site().with_admin(args.admin);
    let tags = CampaignTags {
        source: args.source,
        medium: args.medium,
        campaign: args.campaign,
        term: args.term,
        content: args.content,
    };
    println!("{}", tag_campaign(url, &tags, &site));
    Ok(())
}
