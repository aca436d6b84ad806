//! Fetch lifecycle shared by every data-backed screen.
//!
//! A screen owns one [`FetchController`]. Issuing a request calls
//! [`FetchController::begin`], which moves to `Loading` and hands out a
//! [`FetchTicket`]. The spawned request carries the ticket back with its
//! result and [`FetchController::resolve`] applies it only if no newer
//! request was issued since.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::FetchError;

/// Source of ticket generations; shared so tickets from a screen that has
/// since been rebuilt can never match the new screen's controller.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    fn next() -> Self {
        Self(NEXT_GENERATION.fetch_add(1, Ordering::Relaxed))
    }

    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// What a data-backed screen currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Success(T),
    /// The request failed; the error is kept for logging, the panel text is fixed
    Failure(FetchError),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ViewState::Failure(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// View state plus the ticket of the latest issued request.
#[derive(Debug, Clone)]
pub struct FetchController<T> {
    state: ViewState<T>,
    latest: Option<FetchTicket>,
}

impl<T> Default for FetchController<T> {
    fn default() -> Self {
        Self {
            state: ViewState::Idle,
            latest: None,
        }
    }
}

impl<T> FetchController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Loading` and issue a ticket for the request about to be sent.
    ///
    /// Any ticket issued earlier becomes stale.
    pub fn begin(&mut self) -> FetchTicket {
        let ticket = FetchTicket::next();
        self.latest = Some(ticket);
        self.state = ViewState::Loading;
        ticket
    }

    /// Apply a result. Returns `false` and leaves the state untouched when
    /// `ticket` is not the latest issued.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<T, FetchError>) -> bool {
        if self.latest != Some(ticket) {
            tracing::debug!(
                generation = ticket.generation(),
                latest = ?self.latest.map(|t| t.generation()),
                "dropping stale response"
            );
            return false;
        }

        self.state = match result {
            Ok(data) => ViewState::Success(data),
            Err(err) => {
                tracing::warn!(error = %err, category = %err.category(), "fetch failed");
                ViewState::Failure(err)
            }
        };
        true
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn latest(&self) -> Option<FetchTicket> {
        self.latest
    }
}
