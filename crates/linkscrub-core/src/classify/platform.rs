//! Platform classification from ordered pattern tables.
//!
//! Tables are plain data ([`PlatformPattern`] rows) compiled once into a
//! [`PlatformClassifier`]. Axes are independent: a URL can be both a video
//! and a social link.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::patterns::{AUDIO_PLATFORMS, SOCIAL_PLATFORMS, VIDEO_PLATFORMS};
use crate::url_model::{self, RawUrl};

/// One row of a platform table: platform name and the regex identifying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformPattern {
    pub platform: &'static str,
    pub pattern: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformAxis {
    Video,
    Audio,
    Social,
}

impl PlatformAxis {
    pub const ALL: [PlatformAxis; 3] = [PlatformAxis::Video, PlatformAxis::Audio, PlatformAxis::Social];

    pub fn as_str(self) -> &'static str {
        match self {
            PlatformAxis::Video => "video",
            PlatformAxis::Audio => "audio",
            PlatformAxis::Social => "social",
        }
    }
}

impl fmt::Display for PlatformAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformAxis {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" => Ok(PlatformAxis::Video),
            "audio" => Ok(PlatformAxis::Audio),
            "social" => Ok(PlatformAxis::Social),
            _ => Err(()),
        }
    }
}

/// Compiled, ordered table for one axis. First match wins.
#[derive(Debug, Clone, Default)]
pub struct PlatformTable {
    entries: Vec<(String, Regex)>,
}

impl PlatformTable {
    pub fn compile(rows: &[PlatformPattern]) -> Result<Self, regex::Error> {
        let mut table = Self::default();
        for row in rows {
            table.push(row.platform, row.pattern)?;
        }
        Ok(table)
    }

    /// Appends a row after the existing ones.
    pub fn push(&mut self, platform: &str, pattern: &str) -> Result<(), regex::Error> {
        self.entries.push((platform.to_string(), Regex::new(pattern)?));
        Ok(())
    }

    /// Name of the first row matching `text`.
    pub fn identify(&self, text: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(platform, _)| platform.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static BUILTIN: Lazy<PlatformClassifier> = Lazy::new(|| {
    PlatformClassifier::new().expect("built-in platform patterns are valid regexes")
});

#[derive(Debug, Clone)]
pub struct PlatformClassifier {
    video: PlatformTable,
    audio: PlatformTable,
    social: PlatformTable,
}

impl PlatformClassifier {
    /// Compiles the built-in tables.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            video: PlatformTable::compile(VIDEO_PLATFORMS)?,
            audio: PlatformTable::compile(AUDIO_PLATFORMS)?,
            social: PlatformTable::compile(SOCIAL_PLATFORMS)?,
        })
    }

    /// Shared instance over the built-in tables.
    pub fn builtin() -> &'static PlatformClassifier {
        &BUILTIN
    }

    pub fn table(&self, axis: PlatformAxis) -> &PlatformTable {
        match axis {
            PlatformAxis::Video => &self.video,
            PlatformAxis::Audio => &self.audio,
            PlatformAxis::Social => &self.social,
        }
    }

    pub fn table_mut(&mut self, axis: PlatformAxis) -> &mut PlatformTable {
        match axis {
            PlatformAxis::Video => &mut self.video,
            PlatformAxis::Audio => &mut self.audio,
            PlatformAxis::Social => &mut self.social,
        }
    }

    /// First platform on `axis` matching `url`; `None` for invalid URLs.
    ///
    /// The host is matched lower-cased and without a default port; scheme,
    /// path, query and fragment are matched as written.
    pub fn identify(&self, url: &str, axis: PlatformAxis) -> Option<&str> {
        self.table(axis).identify(&match_text(url)?)
    }

    pub fn matches(&self, url: &str, axis: PlatformAxis) -> bool {
        self.identify(url, axis).is_some()
    }
}

fn match_text(url: &str) -> Option<String> {
    let url = url.trim();
    let parsed = url_model::parse(url)?;
    let raw = RawUrl::split(url);
    let (scheme, _) = raw.head.split_once(':')?;

    let mut text = if parsed.host().is_empty() {
        format!("{}:", scheme)
    } else {
        format!("{}://{}", scheme, parsed.host())
    };
    if let Some(port) = parsed.port() {
        text.push_str(&format!(":{}", port));
    }
    text.push_str(parsed.path());
    if let Some(query) = raw.query {
        text.push('?');
        text.push_str(query);
    }
    if let Some(fragment) = raw.fragment {
        text.push('#');
        text.push_str(fragment);
    }
    Some(text)
}

pub fn identify_platform(url: &str, axis: PlatformAxis) -> Option<&'static str> {
    PlatformClassifier::builtin().identify(url, axis)
}

pub fn is_video_platform(url: &str) -> bool {
    PlatformClassifier::builtin().matches(url, PlatformAxis::Video)
}

pub fn is_audio_platform(url: &str) -> bool {
    PlatformClassifier::builtin().matches(url, PlatformAxis::Audio)
}

pub fn is_social_platform(url: &str) -> bool {
    PlatformClassifier::builtin().matches(url, PlatformAxis::Social)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_compile() {
        let classifier = PlatformClassifier::new().unwrap();
        assert!(classifier.table(PlatformAxis::Video).len() >= 20);
        assert!(classifier.table(PlatformAxis::Audio).len() >= 20);
        assert!(classifier.table(PlatformAxis::Social).len() >= 20);
    }

    #[test]
    fn video_platforms() {
        assert!(is_video_platform("https://youtube.com/watch?v=abc123"));
        assert!(is_video_platform("https://www.youtube.com/shorts/xyz"));
        assert!(is_video_platform("https://m.youtube.com/watch?v=abc"));
        assert!(is_video_platform("https://youtu.be/dQw4w9WgXcQ"));
        assert!(is_video_platform("https://vimeo.com/123456"));
        assert!(is_video_platform("https://player.vimeo.com/video/42"));
        assert!(is_video_platform("https://www.tiktok.com/@user/video/7123"));
        assert!(!is_video_platform("https://example.com/video.mp4"));
        assert!(!is_video_platform("https://youtube.com/about"));
    }

    #[test]
    fn audio_platforms() {
        assert!(is_audio_platform("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC"));
        assert!(is_audio_platform("https://soundcloud.com/artist/song-name"));
        assert!(is_audio_platform("https://artist.bandcamp.com/album/first"));
        assert!(!is_audio_platform("https://example.com/song.mp3"));
    }

    #[test]
    fn social_platforms() {
        assert!(is_social_platform("https://twitter.com/someone"));
        assert!(is_social_platform("https://x.com/someone/status/1"));
        assert!(is_social_platform("https://www.linkedin.com/in/someone"));
        assert!(is_social_platform("https://t.me/channel"));
        assert!(!is_social_platform("https://example.com/twitter.com/"));
    }

    #[test]
    fn axes_are_independent() {
        let url = "https://www.facebook.com/page/videos/123";
        assert!(is_video_platform(url));
        assert!(is_social_platform(url));
        assert!(!is_audio_platform(url));
    }

    #[test]
    fn first_match_names_platform() {
        assert_eq!(identify_platform("https://youtu.be/x", PlatformAxis::Video), Some("youtube"));
        assert_eq!(
            identify_platform("https://music.youtube.com/watch?v=1", PlatformAxis::Audio),
            Some("youtube_music")
        );
        assert_eq!(identify_platform("https://example.com", PlatformAxis::Social), None);
    }

    #[test]
    fn host_case_and_default_port_are_normalized() {
        assert!(is_video_platform("https://www.YouTube.com/watch?v=abc"));
        assert!(is_video_platform("https://youtube.com:443/watch?v=abc"));
        assert!(is_social_platform("http://TWITTER.COM:80/someone"));
        assert!(!is_video_platform("https://youtube.com:8443/watch?v=abc"));
        assert!(!is_video_platform("https://youtube.com/WATCH?v=abc"));
    }

    #[test]
    fn scheme_marker_is_case_sensitive() {
        assert!(!is_video_platform("HTTPS://youtube.com/watch?v=abc"));
    }

    #[test]
    fn invalid_urls_never_match() {
        assert!(!is_video_platform("youtube.com/watch?v=abc"));
        assert!(!is_social_platform(""));
    }

    #[test]
    fn tables_can_be_extended() {
        let mut classifier = PlatformClassifier::new().unwrap();
        classifier
            .table_mut(PlatformAxis::Video)
            .push("internal", r"^https://videos\.corp\.example/")
            .unwrap();
        assert!(classifier.matches("https://videos.corp.example/v/1", PlatformAxis::Video));
        assert!(classifier.table_mut(PlatformAxis::Video).push("bad", "(").is_err());
    }
}
