use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::classify::{ExtensionSet, MediaExtensions, MediaKind};
use crate::probe::{default_user_agent, CurlProber, DEFAULT_MAX_REDIRECTS};
use crate::site::StaticSite;
use crate::tracking::{RemovalPolicy, TrackingParams};
use crate::url_model::TargetScheme;

/// `[tracking]` section: startup additions to the global set and a default keep list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Names added to the built-in tracking set at startup.
    #[serde(default)]
    pub extra_params: Vec<String>,
    /// Names never removed unless a call overrides the policy.
    #[serde(default)]
    pub keep: Vec<String>,
}

/// `[probe]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub timeout_secs: u64,
    pub max_redirects: u32,
    /// Requests in flight during bulk probing.
    pub parallelism: usize,
    /// Overrides the `linkscrub/<version>` user agent.
    pub user_agent: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            parallelism: 8,
            user_agent: None,
        }
    }
}

/// `[extensions]` section. A list given here replaces the built-in set for
/// that kind; it is not merged with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionsConfig {
    #[serde(default)]
    pub image: Option<Vec<String>>,
    #[serde(default)]
    pub video: Option<Vec<String>>,
    #[serde(default)]
    pub audio: Option<Vec<String>>,
    #[serde(default)]
    pub document: Option<Vec<String>>,
}

impl ExtensionsConfig {
    fn for_kind(&self, kind: MediaKind) -> Option<&Vec<String>> {
        match kind {
            MediaKind::Image => self.image.as_ref(),
            MediaKind::Video => self.video.as_ref(),
            MediaKind::Audio => self.audio.as_ref(),
            MediaKind::Document => self.document.as_ref(),
        }
    }
}

fn default_scheme() -> String {
    TargetScheme::default().as_str().to_string()
}

/// Global configuration loaded from `~/.config/linkscrub/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkscrubConfig {
    /// Reference site for internal/external and relative-link decisions.
    #[serde(default)]
    pub site_url: Option<String>,
    /// Scheme used by `add_scheme` when none is requested; falls back to https.
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
    #[serde(default)]
    pub tracking: TrackingConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub extensions: ExtensionsConfig,
}

impl Default for LinkscrubConfig {
    fn default() -> Self {
        Self {
            site_url: None,
            default_scheme: default_scheme(),
            tracking: TrackingConfig::default(),
            probe: ProbeConfig::default(),
            extensions: ExtensionsConfig::default(),
        }
    }
}

impl LinkscrubConfig {
    pub fn target_scheme(&self) -> TargetScheme {
        TargetScheme::from_request(&self.default_scheme)
    }

    /// Site context for `site_url`, or an empty one when unset.
    pub fn site(&self) -> StaticSite {
        StaticSite::new(self.site_url.clone().unwrap_or_default())
    }

    /// Built-in tracking set plus `tracking.extra_params`.
    pub fn tracking_params(&self) -> TrackingParams {
        let params = TrackingParams::with_defaults();
        let added = params.extend(&self.tracking.extra_params);
        if added > 0 {
            tracing::info!(added, "extended tracking set from config");
        }
        params
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        RemovalPolicy::new().with_keep(&self.tracking.keep)
    }

    pub fn media_extensions(&self) -> MediaExtensions {
        let mut extensions = MediaExtensions::default();
        for kind in MediaKind::ALL {
            if let Some(list) = self.extensions.for_kind(kind) {
                extensions.set(kind, ExtensionSet::from_list(list));
            }
        }
        extensions
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe.timeout_secs.max(1))
    }

    pub fn prober(&self) -> CurlProber {
        let user_agent = self
            .probe
            .user_agent
            .clone()
            .unwrap_or_else(default_user_agent);
        CurlProber::new(self.probe.max_redirects, user_agent)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkscrub")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkscrubConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkscrubConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file; it must exist.
pub fn load_from_path(path: &Path) -> Result<LinkscrubConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: LinkscrubConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{is_image, is_video};

    #[test]
    fn default_config_values() {
        let cfg = LinkscrubConfig::default();
        assert_eq!(cfg.site_url, None);
        assert_eq!(cfg.default_scheme, "https");
        assert_eq!(cfg.probe.timeout_secs, 10);
        assert_eq!(cfg.probe.max_redirects, 10);
        assert_eq!(cfg.probe.parallelism, 8);
        assert!(cfg.tracking.extra_params.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let mut cfg = LinkscrubConfig::default();
        cfg.site_url = Some("https://mysite.com".into());
        cfg.extensions.image = Some(vec!["heic".into()]);
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: LinkscrubConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg: LinkscrubConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, LinkscrubConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            site_url = "https://mysite.com/blog"
            default_scheme = "http"

            [tracking]
            extra_params = ["x_campaign", " Partner_ID "]
            keep = ["ref"]

            [probe]
            timeout_secs = 3
            parallelism = 2
        "#;
        let cfg: LinkscrubConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.target_scheme(), TargetScheme::Http);
        assert_eq!(cfg.probe.timeout_secs, 3);
        assert_eq!(cfg.probe.max_redirects, 10);
        assert_eq!(cfg.probe.parallelism, 2);

        let params = cfg.tracking_params();
        assert!(params.contains("x_campaign"));
        assert!(params.contains("partner_id"));
        assert!(params.contains("utm_source"));

        let site = cfg.site();
        assert_eq!(crate::site::SiteContext::current_site_host(&site), "mysite.com");

        let policy = cfg.removal_policy();
        assert_eq!(
            params.strip("https://a.com/?ref=1&x_campaign=2", &policy),
            "https://a.com/?ref=1"
        );
    }

    #[test]
    fn unknown_scheme_falls_back_to_https() {
        let cfg: LinkscrubConfig = toml::from_str(r#"default_scheme = "gopher""#).unwrap();
        assert_eq!(cfg.target_scheme(), TargetScheme::Https);
    }

    #[test]
    fn extension_lists_replace_defaults() {
        let toml = r#"
            [extensions]
            image = ["heic", ".AVIF"]
        "#;
        let cfg: LinkscrubConfig = toml::from_str(toml).unwrap();
        let ext = cfg.media_extensions();
        assert!(is_image("https://a.com/p.heic", Some(ext.get(MediaKind::Image))));
        assert!(is_image("https://a.com/p.avif", Some(ext.get(MediaKind::Image))));
        assert!(!is_image("https://a.com/p.png", Some(ext.get(MediaKind::Image))));
        assert!(is_video("https://a.com/v.mp4", Some(ext.get(MediaKind::Video))));
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "site_url = \"https://mysite.com\"\n").unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.site_url.as_deref(), Some("https://mysite.com"));
    }

    #[test]
    fn load_from_path_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "site_url = [").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing config"));
        assert!(load_from_path(&dir.path().join("missing.toml")).is_err());
    }
}
