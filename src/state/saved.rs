use crate::models::VideoSummary;

/// Videos the user marked as saved during this run.
///
/// Membership is keyed by id. Entries keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct SavedVideos {
    items: Vec<VideoSummary>,
}

impl SavedVideos {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the entry with `video.id` if present, otherwise append `video`.
    ///
    /// Returns `true` when the video is saved afterwards.
    pub fn toggle(&mut self, video: VideoSummary) -> bool {
        if let Some(pos) = self.items.iter().position(|v| v.id == video.id) {
            self.items.remove(pos);
            tracing::info!(id = %video.id, "video unsaved");
            false
        } else {
            tracing::info!(id = %video.id, "video saved");
            self.items.push(video);
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|v| v.id == id)
    }

    pub fn list(&self) -> &[VideoSummary] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
