//! Client-side state containers
//!
//! - [`FetchController`]: view state of one screen's remote data
//! - [`SavedVideos`]: the saved-items registry owned by the app shell
//! - [`Reactions`]: like/dislike toggles on the detail screen

pub mod fetch;
pub mod reactions;
pub mod saved;

pub use fetch::{FetchController, FetchTicket, ViewState};
pub use reactions::Reactions;
pub use saved::SavedVideos;
