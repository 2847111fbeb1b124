//! File-type classification by path extension.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::url_model;

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "svg", "bmp", "ico", "tif", "tiff", "avif", "heic",
    "heif",
];
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "m4v", "webm", "ogv", "mov", "avi", "wmv", "flv", "mkv", "mpg", "mpeg", "3gp", "m3u8",
];
const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "wav", "ogg", "oga", "m4a", "aac", "flac", "wma", "opus", "aiff", "mid", "midi",
];
const DOCUMENT_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "ods", "odp", "rtf", "txt", "csv",
    "epub",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
}

impl MediaKind {
    pub const ALL: [MediaKind; 4] = [
        MediaKind::Image,
        MediaKind::Video,
        MediaKind::Audio,
        MediaKind::Document,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Document => "document",
        }
    }

    pub fn default_extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => IMAGE_EXTENSIONS,
            MediaKind::Video => VIDEO_EXTENSIONS,
            MediaKind::Audio => AUDIO_EXTENSIONS,
            MediaKind::Document => DOCUMENT_EXTENSIONS,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            "audio" => Ok(MediaKind::Audio),
            "document" => Ok(MediaKind::Document),
            _ => Err(()),
        }
    }
}

/// Recognized extensions for one media kind.
///
/// A caller-supplied set replaces the default for that call; it is never
/// merged with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: BTreeSet<String>,
}

impl ExtensionSet {
    pub fn defaults(kind: MediaKind) -> Self {
        Self::from_list(kind.default_extensions())
    }

    /// Normalizes entries: trimmed, leading dot removed, lower-cased.
    pub fn from_list<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { extensions }
    }

    pub fn contains(&self, extension: &str) -> bool {
        !extension.is_empty() && self.extensions.contains(&extension.to_ascii_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

/// One extension set per media kind, e.g. loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaExtensions {
    pub image: ExtensionSet,
    pub video: ExtensionSet,
    pub audio: ExtensionSet,
    pub document: ExtensionSet,
}

impl Default for MediaExtensions {
    fn default() -> Self {
        Self {
            image: ExtensionSet::defaults(MediaKind::Image),
            video: ExtensionSet::defaults(MediaKind::Video),
            audio: ExtensionSet::defaults(MediaKind::Audio),
            document: ExtensionSet::defaults(MediaKind::Document),
        }
    }
}

impl MediaExtensions {
    pub fn get(&self, kind: MediaKind) -> &ExtensionSet {
        match kind {
            MediaKind::Image => &self.image,
            MediaKind::Video => &self.video,
            MediaKind::Audio => &self.audio,
            MediaKind::Document => &self.document,
        }
    }

    pub fn set(&mut self, kind: MediaKind, extensions: ExtensionSet) {
        match kind {
            MediaKind::Image => self.image = extensions,
            MediaKind::Video => self.video = extensions,
            MediaKind::Audio => self.audio = extensions,
            MediaKind::Document => self.document = extensions,
        }
    }

    /// First kind (in [`MediaKind::ALL`] order) whose set holds the URL's extension.
    pub fn kind_of(&self, url: &str) -> Option<MediaKind> {
        let extension = url_model::get_extension(url);
        MediaKind::ALL
            .into_iter()
            .find(|kind| self.get(*kind).contains(&extension))
    }
}

/// True iff the URL's extension is in `extensions`, or the default set for `kind`.
pub fn has_media_extension(url: &str, kind: MediaKind, extensions: Option<&ExtensionSet>) -> bool {
    let extension = url_model::get_extension(url);
    match extensions {
        Some(set) => set.contains(&extension),
        None => ExtensionSet::defaults(kind).contains(&extension),
    }
}

pub fn is_image(url: &str, extensions: Option<&ExtensionSet>) -> bool {
    has_media_extension(url, MediaKind::Image, extensions)
}

pub fn is_video(url: &str, extensions: Option<&ExtensionSet>) -> bool {
    has_media_extension(url, MediaKind::Video, extensions)
}

pub fn is_audio(url: &str, extensions: Option<&ExtensionSet>) -> bool {
    has_media_extension(url, MediaKind::Audio, extensions)
}

pub fn is_document(url: &str, extensions: Option<&ExtensionSet>) -> bool {
    has_media_extension(url, MediaKind::Document, extensions)
}
