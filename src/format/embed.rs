use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix of every embeddable player URL.
pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";

static VIDEO_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"v=([^&]+)").expect("Invalid video id regex pattern"));

/// The first `v=` query value of a watch URL, or `""`.
pub fn video_id(video_url: &str) -> &str {
    VIDEO_ID
        .captures(video_url)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}

/// Embeddable player URL for a watch URL.
///
/// A URL without a `v=` parameter yields the bare embed prefix.
pub fn embed_url(video_url: &str) -> String {
    format!("{}{}", EMBED_BASE, video_id(video_url))
}
