//! CLI for linkscrub.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use linkscrub_core::config::{self, LinkscrubConfig};
use std::path::PathBuf;

use commands::{
    run_classify, run_completions, run_domains, run_extract, run_filter, run_has_tracking,
    run_params, run_probe, run_relative, run_sanitize, run_scheme, run_strip, run_tag, FilterArgs, TagArgs,
};

/// Top-level CLI for linkscrub.
#[derive(Debug, Parser)]
#[command(name = "linkscrub")]
#[command(about = "linkscrub: strip tracking parameters, classify and filter URLs", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/linkscrub/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Remove tracking parameters from each URL. Invalid URLs are echoed unchanged.
    Strip {
        #[arg(required = true)]
        urls: Vec<String>,
        /// Also remove this parameter (repeatable).
        #[arg(long, value_name = "NAME")]
        custom: Vec<String>,
        /// Never remove this parameter (repeatable).
        #[arg(long, value_name = "NAME")]
        keep: Vec<String>,
    },

    /// Validate, strip and dedupe a URL list (one per line). Invalid lines are dropped.
    Sanitize {
        /// Read URLs from FILE instead of stdin.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        #[arg(long, value_name = "NAME")]
        custom: Vec<String>,
        #[arg(long, value_name = "NAME")]
        keep: Vec<String>,
    },

    /// Find URLs in free text.
    Extract {
        /// Text file to scan (default: stdin).
        file: Option<PathBuf>,
    },

    /// Report whether a URL carries a parameter from the tracking set.
    HasTracking { url: String },

    /// List the tracking parameter set.
    Params,

    /// Show the parsed components and classification of a URL.
    Classify {
        url: String,
        #[arg(long)]
        json: bool,
    },

    /// Put http:// or https:// on each URL, replacing an existing web scheme.
    Scheme {
        #[arg(required = true)]
        urls: Vec<String>,
        /// http | https (default: default_scheme from config).
        #[arg(long, value_name = "SCHEME")]
        scheme: Option<String>,
    },

    /// Make a same-site URL relative to the site.
    Relative {
        url: String,
        /// Site base URL (default: site_url from config).
        #[arg(long, value_name = "URL")]
        site: Option<String>,
    },

    /// Keep URLs matching every given selector.
    Filter {
        /// internal | external
        #[arg(long, value_name = "LOCATION")]
        location: Option<String>,
        /// http | https
        #[arg(long, value_name = "PROTOCOL")]
        protocol: Option<String>,
        /// image | video | audio | document | social
        #[arg(long = "type", value_name = "TYPE")]
        link_type: Option<String>,
        /// Site base URL for --location (default: site_url from config).
        #[arg(long, value_name = "URL")]
        site: Option<String>,
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Print the distinct hosts of a URL list.
    Domains {
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Add utm_* campaign parameters to a URL.
    Tag {
        url: String,
        #[arg(long)]
        source: String,
        #[arg(long)]
        campaign: String,
        /// Default: "admin" with --admin, otherwise "website".
        #[arg(long)]
        medium: Option<String>,
        #[arg(long)]
        term: Option<String>,
        #[arg(long)]
        content: Option<String>,
        /// Tag as if from an administrative screen.
        #[arg(long)]
        admin: bool,
    },

    /// Check whether URLs respond (HEAD, redirects followed).
    Probe {
        #[arg(required = true)]
        urls: Vec<String>,
        /// Per-request timeout in seconds (default from config).
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
        #[arg(long)]
        json: bool,
    },

    /// Print a shell completion script.
    Completions { shell: Shell },
}

fn load_config(path: Option<&PathBuf>) -> Result<LinkscrubConfig> {
    match path {
        Some(path) => config::load_from_path(path),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        if let CliCommand::Completions { shell } = cli.command {
            return run_completions(shell);
        }
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Strip { urls, custom, keep } => run_strip(&cfg, &urls, &custom, &keep)?,
            CliCommand::Sanitize {
                input,
                custom,
                keep,
            } => run_sanitize(&cfg, input.as_deref(), &custom, &keep)?,
            CliCommand::Extract { file } => run_extract(file.as_deref())?,
            CliCommand::HasTracking { url } => run_has_tracking(&cfg, &url)?,
            CliCommand::Params => run_params(&cfg)?,
            CliCommand::Classify { url, json } => run_classify(&cfg, &url, json)?,
            CliCommand::Scheme { urls, scheme } => run_scheme(&cfg, &urls, scheme.as_deref())?,
            CliCommand::Relative { url, site } => run_relative(&cfg, &url, site.as_deref())?,
            CliCommand::Filter {
                location,
                protocol,
                link_type,
                site,
                input,
            } => run_filter(
                &cfg,
                &FilterArgs {
                    location,
                    protocol,
                    link_type,
                    site,
                },
                input.as_deref(),
            )?,
            CliCommand::Domains { input } => run_domains(input.as_deref())?,
            CliCommand::Tag {
                url,
                source,
                campaign,
                medium,
                term,
                content,
                admin,
            } => run_tag(
                &cfg,
                &url,
                TagArgs {
                    source,
                    campaign,
                    medium,
                    term,
                    content,
                    admin,
                },
            )?,
            CliCommand::Probe { urls, timeout, json } => run_probe(&cfg, urls, timeout, json).await?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
