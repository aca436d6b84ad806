use serde::{Deserialize, Serialize};

/// Listing category, mapped to the `/videos/<segment>` endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    All,
    Trending,
    Gaming,
}

impl Category {
    /// Path segment under `/videos`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Trending => "trending",
            Category::Gaming => "gaming",
        }
    }

    /// Heading shown above the listing.
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "Home",
            Category::Trending => "Trending",
            Category::Gaming => "Gaming",
        }
    }

    /// Only the `all` endpoint accepts a search term.
    pub fn supports_search(&self) -> bool {
        matches!(self, Category::All)
    }
}

/// Compact per-card representation of a video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    /// Raw count as sent by the API; see [`crate::format::format_view_count`].
    pub view_count: String,
    /// Absent for gaming summaries.
    pub published_at: Option<String>,
    pub channel_name: Option<String>,
    pub channel_avatar_url: Option<String>,
}

/// Full single-video representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoDetail {
    pub summary: VideoSummary,
    pub video_url: String,
    pub description: String,
    pub subscriber_count: String,
}

impl VideoDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    /// Project to the card representation stored by the saved-items registry.
    pub fn to_summary(&self) -> VideoSummary {
        self.summary.clone()
    }
}
