//! Structural URL classification: file type by extension, platform by pattern.
//!
//! Nothing here touches the network or inspects content. Extension and
//! platform checks are independent; a `.mp4` on a video platform satisfies
//! both, so callers wanting "any video" OR them.

mod extension;
mod patterns;
mod platform;

pub use extension::{
    has_media_extension, is_audio, is_document, is_image, is_video, ExtensionSet, MediaExtensions,
    MediaKind,
};
pub use patterns::{AUDIO_PLATFORMS, SOCIAL_PLATFORMS, VIDEO_PLATFORMS};
pub use platform::{
    identify_platform, is_audio_platform, is_social_platform, is_video_platform, PlatformAxis,
    PlatformClassifier, PlatformPattern, PlatformTable,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_and_platform_are_separate_checks() {
        let file = "https://example.com/video.mp4";
        assert!(is_video(file, None));
        assert!(!is_video_platform(file));

        let hosted = "https://player.vimeo.com/video/42/clip.mp4";
        assert!(is_video(hosted, None));
        assert!(is_video_platform(hosted));
    }
}
