//! `linkscrub probe <url>...` – reachability check.

use anyhow::{Context, Result};
use linkscrub_core::config::LinkscrubConfig;
use linkscrub_core::probe::{probe_multiple, ReachabilityInfo};
use serde_json::json;
use std::time::Duration;

fn print_table(urls: &[String], results: &[ReachabilityInfo]) {
    println!("{:<6} {:<10} {}", "STATUS", "REACHABLE", "URL");
    for (url, info) in urls.iter().zip(results) {
        let status = info
            .status_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        let mut line = format!("{:<6} {:<10} {}", status, info.reachable, url);
        if let Some(final_url) = info.final_url.as_deref().filter(|f| *f != url.as_str()) {
            line.push_str(&format!(" -> {final_url}"));
        }
        if let Some(err) = &info.error {
            line.push_str(&format!(" ({err})"));
        }
        println!("{line}");
    }
}

pub async fn run_probe(
    cfg: &LinkscrubConfig,
    urls: Vec<String>,
    timeout_secs: Option<u64>,
    as_json: bool,
) -> Result<()> {
    let timeout = timeout_secs
        .map(|s| Duration::from_secs(s.max(1)))
        .unwrap_or_else(|| cfg.probe_timeout());
    let prober = cfg.prober();
    let parallelism = cfg.probe.parallelism;

    let (urls, results) = tokio::task::spawn_blocking(move || {
        let results = probe_multiple(&prober, &urls, timeout, parallelism);
        (urls, results)
    })
    .await
    .context("probe task join")?;

    if as_json {
        let rows: Vec<_> = urls
            .iter()
            .zip(&results)
            .map(|(url, info)| json!({ "url": url, "result": info }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_table(&urls, &results);
    }
    Ok(())
}
