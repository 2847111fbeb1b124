//! Built-in platform pattern tables.
//!
//! Each table is ordered; the first matching row names the platform.
//! Patterns are matched against the whole URL and tolerate the usual host
//! variants (`www.`, mobile subdomains, short-link domains). Scheme markers
//! are case-sensitive.

use super::platform::PlatformPattern;

const fn p(platform: &'static str, pattern: &'static str) -> PlatformPattern {
    PlatformPattern { platform, pattern }
}

pub const VIDEO_PLATFORMS: &[PlatformPattern] = &[
    p("youtube", r"^https?://(?:www\.|m\.|music\.)?youtube\.com/(?:watch\?|embed/|shorts/|live/|v/|playlist\?)"),
    p("youtube", r"^https?://youtu\.be/[\w-]+"),
    p("youtube", r"^https?://(?:www\.)?youtube-nocookie\.com/embed/"),
    p("vimeo", r"^https?://(?:www\.)?vimeo\.com/(?:channels/[\w-]+/|groups/[\w-]+/videos/|showcase/\d+/video/)?\d+"),
    p("vimeo", r"^https?://player\.vimeo\.com/video/\d+"),
    p("dailymotion", r"^https?://(?:www\.)?dailymotion\.com/(?:embed/)?video/\w+"),
    p("dailymotion", r"^https?://dai\.ly/\w+"),
    p("twitch", r"^https?://(?:www\.|m\.|clips\.|player\.)?twitch\.tv/"),
    p("tiktok", r"^https?://(?:www\.|m\.)?tiktok\.com/@[\w.-]+/video/\d+"),
    p("tiktok", r"^https?://(?:vm|vt)\.tiktok\.com/\w+"),
    p("facebook", r"^https?://(?:www\.|m\.|web\.)?facebook\.com/(?:[\w.-]+/videos/|watch/?\?v=|reel/)"),
    p("facebook", r"^https?://fb\.watch/"),
    p("instagram", r"^https?://(?:www\.)?instagram\.com/(?:reels?|tv)/[\w-]+"),
    p("wistia", r"^https?://(?:[\w-]+\.)?wistia\.(?:com|net)/(?:medias|embed)/"),
    p("vidyard", r"^https?://(?:share|play|embed)\.vidyard\.com/"),
    p("loom", r"^https?://(?:www\.)?loom\.com/(?:share|embed)/"),
    p("streamable", r"^https?://(?:www\.)?streamable\.com/(?:e/)?\w+"),
    p("rumble", r"^https?://(?:www\.)?rumble\.com/(?:embed/)?v\w+"),
    p("bilibili", r"^https?://(?:www\.|m\.)?bilibili\.com/video/"),
    p("bilibili", r"^https?://b23\.tv/"),
    p("kick", r"^https?://(?:www\.)?kick\.com/[\w-]+"),
    p("odysee", r"^https?://(?:www\.)?odysee\.com/@"),
    p("ted", r"^https?://(?:www\.|embed\.)?ted\.com/talks/"),
    p("brightcove", r"^https?://players\.brightcove\.net/"),
    p("vevo", r"^https?://(?:www\.)?vevo\.com/watch/"),
    p("nebula", r"^https?://(?:www\.)?nebula\.tv/videos/"),
];

pub const AUDIO_PLATFORMS: &[PlatformPattern] = &[
    p("spotify", r"^https?://open\.spotify\.com/(?:intl-[\w-]+/)?(?:track|album|playlist|episode|show|artist)/\w+"),
    p("spotify", r"^https?://spotify\.link/"),
    p("soundcloud", r"^https?://(?:www\.|m\.)?soundcloud\.com/[\w-]+/[\w-]+"),
    p("soundcloud", r"^https?://on\.soundcloud\.com/"),
    p("soundcloud", r"^https?://w\.soundcloud\.com/player/"),
    p("apple_music", r"^https?://(?:embed\.)?music\.apple\.com/"),
    p("apple_podcasts", r"^https?://(?:embed\.)?podcasts\.apple\.com/"),
    p("youtube_music", r"^https?://music\.youtube\.com/(?:watch|playlist)\?"),
    p("bandcamp", r"^https?://[\w-]+\.bandcamp\.com/(?:track|album)/"),
    p("mixcloud", r"^https?://(?:www\.)?mixcloud\.com/[\w-]+/[\w-]+"),
    p("deezer", r"^https?://(?:www\.)?deezer\.com/(?:[a-z]{2}/)?(?:track|album|playlist|episode|show)/\d+"),
    p("deezer", r"^https?://deezer\.page\.link/"),
    p("tidal", r"^https?://(?:www\.|listen\.)?tidal\.com/(?:browse/)?(?:track|album|playlist)/"),
    p("amazon_music", r"^https?://music\.amazon\.[a-z.]+/"),
    p("audiomack", r"^https?://(?:www\.)?audiomack\.com/[\w-]+/(?:song|album|playlist)/"),
    p("anchor", r"^https?://(?:www\.)?anchor\.fm/"),
    p("podbean", r"^https?://(?:[\w-]+\.)?podbean\.com/(?:e|media|player)"),
    p("buzzsprout", r"^https?://(?:www\.)?buzzsprout\.com/\d+"),
    p("libsyn", r"^https?://[\w-]+\.libsyn\.com/"),
    p("pocket_casts", r"^https?://pca\.st/"),
    p("overcast", r"^https?://overcast\.fm/"),
    p("castbox", r"^https?://castbox\.fm/"),
    p("audioboom", r"^https?://(?:www\.)?audioboom\.com/posts/"),
    p("reverbnation", r"^https?://(?:www\.)?reverbnation\.com/"),
];

pub const SOCIAL_PLATFORMS: &[PlatformPattern] = &[
    p("facebook", r"^https?://(?:www\.|m\.|web\.|mbasic\.)?facebook\.com/"),
    p("facebook", r"^https?://fb\.(?:com|me)/"),
    p("instagram", r"^https?://(?:www\.)?instagram\.com/"),
    p("instagram", r"^https?://instagr\.am/"),
    p("x", r"^https?://(?:www\.|mobile\.)?(?:twitter|x)\.com/"),
    p("x", r"^https?://t\.co/"),
    p("linkedin", r"^https?://(?:[a-z]{2,3}\.|www\.)?linkedin\.com/"),
    p("linkedin", r"^https?://lnkd\.in/"),
    p("pinterest", r"^https?://(?:[a-z]{2}\.|www\.)?pinterest\.(?:com|co\.uk|[a-z]{2})/"),
    p("pinterest", r"^https?://pin\.it/"),
    p("reddit", r"^https?://(?:www\.|old\.|new\.|m\.|np\.)?reddit\.com/"),
    p("reddit", r"^https?://redd\.it/"),
    p("tiktok", r"^https?://(?:www\.|m\.|vm\.|vt\.)?tiktok\.com/"),
    p("youtube", r"^https?://(?:www\.|m\.)?youtube\.com/(?:@[\w.-]+|c/|channel/|user/)"),
    p("snapchat", r"^https?://(?:www\.|story\.)?snapchat\.com/"),
    p("tumblr", r"^https?://(?:[\w-]+\.)?tumblr\.com/"),
    p("threads", r"^https?://(?:www\.)?threads\.(?:net|com)/"),
    p("mastodon", r"^https?://(?:mastodon\.social|mastodon\.online|mstdn\.social|fosstodon\.org)/@"),
    p("bluesky", r"^https?://(?:www\.)?bsky\.app/profile/"),
    p("telegram", r"^https?://(?:t|telegram)\.me/"),
    p("whatsapp", r"^https?://(?:wa\.me|chat\.whatsapp\.com|api\.whatsapp\.com)/"),
    p("discord", r"^https?://(?:www\.)?discord(?:app)?\.(?:com|gg)/"),
    p("vk", r"^https?://(?:www\.|m\.)?vk\.com/"),
    p("weibo", r"^https?://(?:www\.|m\.)?weibo\.(?:com|cn)/"),
    p("quora", r"^https?://(?:www\.|[a-z]{2}\.)?quora\.com/"),
    p("flickr", r"^https?://(?:www\.)?flickr\.com/"),
    p("xing", r"^https?://(?:www\.)?xing\.com/profile/"),
    p("line", r"^https?://line\.me/"),
];
