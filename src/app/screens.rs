//! Per-route screen state.
//!
//! Screens are rebuilt on every navigation; nothing here outlives the route
//! that created it except through [`crate::state::SavedVideos`].

use crate::error::FetchError;
use crate::models::{Category, VideoDetail, VideoSummary};
use crate::state::{FetchController, FetchTicket, Reactions};

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// Login form state.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub show_password: bool,
    /// Inline message from the last failed attempt
    pub error: Option<String>,
    /// A login request is in flight
    pub submitting: bool,
}

impl LoginForm {
    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn switch_field(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Password as displayed: masked unless show-password is on.
    pub fn password_display(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            "*".repeat(self.password.chars().count())
        }
    }
}

// ============================================================================
// Listings
// ============================================================================

/// A grid of video cards fed by one listing request.
#[derive(Debug, Clone)]
pub struct ListingScreen {
    pub category: Category,
    /// Committed search term; only sent for categories that support search
    pub search: String,
    pub videos: FetchController<Vec<VideoSummary>>,
    pub selected: usize,
}

impl ListingScreen {
    pub fn new(category: Category, search: Option<String>) -> Self {
        Self {
            category,
            search: search.unwrap_or_default(),
            videos: FetchController::new(),
            selected: 0,
        }
    }

    /// The search term to send with the request.
    pub fn search_term(&self) -> Option<&str> {
        self.category
            .supports_search()
            .then_some(self.search.as_str())
    }

    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<VideoSummary>, FetchError>,
    ) -> bool {
        let applied = self.videos.resolve(ticket, result);
        if applied {
            self.selected = 0;
        }
        applied
    }

    /// Succeeded with zero videos.
    pub fn is_empty_result(&self) -> bool {
        self.videos.data().is_some_and(|videos| videos.is_empty())
    }

    pub fn selected_video(&self) -> Option<&VideoSummary> {
        self.videos.data().and_then(|videos| videos.get(self.selected))
    }

    /// Move the selection by `delta` cards, clamped to the grid.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.videos.data().map_or(0, Vec::len);
        self.selected = clamp_index(self.selected, delta, len);
    }
}

/// The home listing with its search bar.
#[derive(Debug, Clone)]
pub struct HomeScreen {
    pub search_input: String,
    pub search_focused: bool,
    pub listing: ListingScreen,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            search_input: String::new(),
            search_focused: false,
            listing: ListingScreen::new(Category::All, None),
        }
    }

    pub fn committed_search(&self) -> &str {
        &self.listing.search
    }

    /// Commit the search input. Returns `true` when the committed term
    /// changed and a new request is needed.
    pub fn commit_search(&mut self) -> bool {
        self.search_focused = false;
        if self.search_input == self.listing.search {
            return false;
        }
        self.listing.search = self.search_input.clone();
        self.listing.selected = 0;
        true
    }

    /// Reset both the input and the committed term.
    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.listing.search.clear();
        self.listing.selected = 0;
    }
}

// ============================================================================
// Detail / Saved
// ============================================================================

/// Single-video screen.
#[derive(Debug, Clone)]
pub struct DetailScreen {
    pub id: String,
    pub video: FetchController<VideoDetail>,
    pub reactions: Reactions,
}

impl DetailScreen {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            video: FetchController::new(),
            reactions: Reactions::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SavedScreen {
    pub selected: usize,
}

impl SavedScreen {
    pub fn move_selection(&mut self, delta: isize, len: usize) {
        self.selected = clamp_index(self.selected, delta, len);
    }
}

fn clamp_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let target = current as isize + delta;
    target.clamp(0, len as isize - 1) as usize
}
