//! `linkscrub classify <url>` – components, media kind and platforms of a URL.

use anyhow::Result;
use linkscrub_core::classify::{PlatformAxis, PlatformClassifier};
use linkscrub_core::config::LinkscrubConfig;
use linkscrub_core::url_model::{self, is_external, site_host_of};
use serde_json::{json, Value};

fn classify(cfg: &LinkscrubConfig, url: &str) -> Value {
    let Some(parsed) = url_model::parse(url) else {
        return json!({ "url": url, "valid": false });
    };
    let media = cfg.media_extensions().kind_of(url).map(|k| k.as_str());
    let platforms = PlatformClassifier::builtin();
    let platform = |axis| platforms.identify(url, axis);
    let external = cfg
        .site_url
        .as_deref()
        .map(|site| is_external(url, &site_host_of(site)));

    json!({
        "url": url,
        "valid": true,
        "scheme": parsed.scheme().as_str(),
        "host": parsed.host(),
        "port": parsed.port(),
        "path": parsed.path(),
        "query": parsed.query_string(),
        "fragment": parsed.fragment(),
        "extension": parsed.extension(),
        "secure": parsed.is_secure(),
        "media": media,
        "video_platform": platform(PlatformAxis::Video),
        "audio_platform": platform(PlatformAxis::Audio),
        "social_platform": platform(PlatformAxis::Social),
        "external": external,
    })
}

pub fn run_classify(cfg: &LinkscrubConfig, url: &str, as_json: bool) -> Result<()> {
    let report = classify(cfg, url);
    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    if let Value::Object(fields) = report {
        for (key, value) in fields {
            let shown = match value {
                Value::Null => "-".to_string(),
                Value::String(s) if s.is_empty() => "-".to_string(),
                Value::String(s) => s,
                other => other.to_string(),
            };
            println!("{:<16} {}", key, shown);
        }
    }
    Ok(())
}
