//! AppMessage enum for async communication within the application.

use crate::error::{AuthError, FetchError};
use crate::models::{Category, VideoDetail, VideoSummary};
use crate::state::FetchTicket;

/// Results of spawned requests, posted back to the UI loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A listing request finished
    ListingLoaded {
        category: Category,
        ticket: FetchTicket,
        result: Result<Vec<VideoSummary>, FetchError>,
    },
    /// A detail request finished
    DetailLoaded {
        id: String,
        ticket: FetchTicket,
        result: Result<VideoDetail, FetchError>,
    },
    /// Login finished; on success the session is already stored
    LoginFinished(Result<(), AuthError>),
}
