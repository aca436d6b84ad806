//! Wire shapes of the video API and their mapping to view models.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{VideoDetail, VideoSummary};

/// Deserialize a field the API sends either as a string or as a number.
fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct StringOrNumberVisitor;

    impl<'de> Visitor<'de> for StringOrNumberVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or number")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(StringOrNumberVisitor)
}

/// Request body of `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /login`, success or failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub jwt_token: Option<String>,
    #[serde(default)]
    pub error_msg: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawChannel {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub subscriber_count: Option<String>,
}

fn deserialize_optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "deserialize_string_or_number")] String);

    Option::<Wrapper>::deserialize(deserializer).map(|w| w.map(|Wrapper(s)| s))
}

/// One entry of the `videos` array.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVideo {
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub view_count: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub channel: Option<RawChannel>,
}

/// Body of the listing endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct VideosResponse {
    pub videos: Vec<RawVideo>,
}

/// The `video_details` object of `GET /videos/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVideoDetails {
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub view_count: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub channel: RawChannel,
}

/// Body of `GET /videos/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoDetailsResponse {
    pub video_details: RawVideoDetails,
}

impl From<RawVideo> for VideoSummary {
    fn from(raw: RawVideo) -> Self {
        let channel = raw.channel.unwrap_or_default();
        VideoSummary {
            id: raw.id,
            title: raw.title,
            thumbnail_url: raw.thumbnail_url,
            view_count: raw.view_count,
            published_at: raw.published_at,
            channel_name: channel.name,
            channel_avatar_url: channel.profile_image_url,
        }
    }
}

impl From<RawVideoDetails> for VideoDetail {
    fn from(raw: RawVideoDetails) -> Self {
        VideoDetail {
            summary: VideoSummary {
                id: raw.id,
                title: raw.title,
                thumbnail_url: raw.thumbnail_url,
                view_count: raw.view_count,
                published_at: raw.published_at,
                channel_name: raw.channel.name,
                channel_avatar_url: raw.channel.profile_image_url,
            },
            video_url: raw.video_url,
            description: raw.description,
            subscriber_count: raw.channel.subscriber_count.unwrap_or_default(),
        }
    }
}
