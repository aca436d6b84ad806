//! Request spawning and message handling for the App.

use super::{App, AppMessage, Route, Screen};
use crate::models::Category;

impl App {
    /// Issue the mounted screen's request, if it has one.
    ///
    /// Called on mount, after a committed search change and on retry. The
    /// request repeats whatever the screen last described.
    pub(super) fn fetch_current(&mut self) {
        let api = self.api.clone();
        let tx = self.message_tx.clone();

        match &mut self.screen {
            Screen::Home(home) => {
                let listing = &mut home.listing;
                let ticket = listing.videos.begin();
                let category = listing.category;
                let search = listing.search_term().map(str::to_string);
                tokio::spawn(async move {
                    let result = api.list_videos(category, search.as_deref()).await;
                    let _ = tx.send(AppMessage::ListingLoaded {
                        category,
                        ticket,
                        result,
                    });
                });
            }
            Screen::Listing(listing) => {
                let ticket = listing.videos.begin();
                let category = listing.category;
                tokio::spawn(async move {
                    let result = api.list_videos(category, None).await;
                    let _ = tx.send(AppMessage::ListingLoaded {
                        category,
                        ticket,
                        result,
                    });
                });
            }
            Screen::Detail(detail) => {
                let ticket = detail.video.begin();
                let id = detail.id.clone();
                tokio::spawn(async move {
                    let result = api.get_video(&id).await;
                    let _ = tx.send(AppMessage::DetailLoaded { id, ticket, result });
                });
            }
            Screen::Login(_) | Screen::Saved(_) => {}
        }
    }

    /// Repeat the mounted screen's last request after a failure.
    pub fn retry(&mut self) {
        let failed = match &self.screen {
            Screen::Home(home) => home.listing.videos.state().is_failure(),
            Screen::Listing(listing) => listing.videos.state().is_failure(),
            Screen::Detail(detail) => detail.video.state().is_failure(),
            Screen::Login(_) | Screen::Saved(_) => false,
        };
        if failed {
            tracing::info!(path = %self.route.path(), "retry");
            self.fetch_current();
        }
    }

    /// Send the login form. Ignored while a request is in flight.
    pub fn submit_login(&mut self) {
        let Screen::Login(form) = &mut self.screen else {
            return;
        };
        if form.submitting {
            return;
        }
        form.submitting = true;
        form.error = None;

        let api = self.api.clone();
        let session = self.session.clone();
        let ttl = self.session_ttl;
        let tx = self.message_tx.clone();
        let username = form.username.clone();
        let password = form.password.clone();

        tokio::spawn(async move {
            let result =
                crate::auth::sign_in(&api, session.as_ref(), ttl, &username, &password).await;
            let _ = tx.send(AppMessage::LoginFinished(result));
        });
    }

    /// Handle an incoming async message.
    ///
    /// Results for a screen that is no longer mounted are dropped.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::ListingLoaded {
                category,
                ticket,
                result,
            } => {
                let listing = match &mut self.screen {
                    Screen::Home(home) if category == Category::All => Some(&mut home.listing),
                    Screen::Listing(listing) if listing.category == category => Some(listing),
                    _ => None,
                };
                match listing {
                    Some(listing) => {
                        listing.resolve(ticket, result);
                    }
                    None => tracing::debug!(?category, "dropping listing for unmounted screen"),
                }
            }
            AppMessage::DetailLoaded { id, ticket, result } => match &mut self.screen {
                Screen::Detail(detail) if detail.id == id => {
                    detail.video.resolve(ticket, result);
                }
                _ => tracing::debug!(%id, "dropping detail for unmounted screen"),
            },
            AppMessage::LoginFinished(result) => {
                let Screen::Login(form) = &mut self.screen else {
                    tracing::debug!("dropping login result for unmounted form");
                    return;
                };
                form.submitting = false;
                match result {
                    Ok(()) => self.replace(Route::Home),
                    Err(err) => {
                        tracing::warn!(error = %err, category = %err.category(), "login failed");
                        form.error = Some(err.user_message());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::mock::{InMemorySession, MockHttpClient, MockResponse};
    use crate::api::VideoApi;
    use crate::config::AppConfig;
    use crate::error::FetchError;
    use crate::state::FetchController;
    use crate::traits::{Response, SessionStore};

    fn app_with(http: &MockHttpClient, session: &InMemorySession) -> App {
        let api = VideoApi::new("https://api.test", Arc::new(http.clone()), Arc::new(session.clone()));
        App::new(api, Arc::new(session.clone()), &AppConfig::default())
    }

    #[tokio::test]
    async fn test_login_success_stores_session_and_goes_home() {
        let http = MockHttpClient::new();
        http.set_response(
            "https://api.test/login",
            MockResponse::json(200, serde_json::json!({"jwt_token": "jwt-1"})),
        );
        http.set_default_response(MockResponse::json(200, serde_json::json!({"videos": []})));
        let session = InMemorySession::new();
        let mut app = app_with(&http, &session);
        app.start();

        app.submit_login();
        assert!(app.is_loading());
        app.process_next_message().await;

        assert_eq!(session.get().as_deref(), Some("jwt-1"));
        assert_eq!(app.route, Route::Home);
    }

    #[tokio::test]
    async fn test_login_failure_shows_inline_error() {
        let http = MockHttpClient::new();
        http.set_response(
            "https://api.test/login",
            MockResponse::json(400, serde_json::json!({"error_msg": "invalid username"})),
        );
        let session = InMemorySession::new();
        let mut app = app_with(&http, &session);
        app.start();

        app.submit_login();
        app.process_next_message().await;

        let Screen::Login(form) = &app.screen else {
            panic!("expected login screen");
        };
        assert_eq!(form.error.as_deref(), Some("invalid username"));
        assert!(!form.submitting);
        assert!(session.get().is_none());
    }

    #[tokio::test]
    async fn test_login_storage_failure_shows_inline_error() {
        let http = MockHttpClient::new();
        http.set_response(
            "https://api.test/login",
            MockResponse::json(200, serde_json::json!({"jwt_token": "jwt-1"})),
        );
        let session = InMemorySession::new();
        session.set_set_should_fail(true);
        let mut app = app_with(&http, &session);
        app.start();

        app.submit_login();
        app.process_next_message().await;

        assert_eq!(app.route, Route::Login);
        let Screen::Login(form) = &app.screen else {
            panic!("expected login screen");
        };
        assert!(form.error.is_some());
    }

    #[tokio::test]
    async fn test_listing_for_other_screen_is_dropped() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(200, serde_json::json!({"videos": []})));
        let mut app = app_with(&http, &InMemorySession::with_token("t"));
        app.start();
        app.navigate(Route::Gaming);

        let ticket = FetchController::<()>::new().begin();
        app.handle_message(AppMessage::ListingLoaded {
            category: Category::Trending,
            ticket,
            result: Err(FetchError::Status { status: 500 }),
        });

        let Screen::Listing(listing) = &app.screen else {
            panic!("expected listing screen");
        };
        assert!(listing.videos.state().is_loading());
    }

    #[tokio::test]
    async fn test_retry_only_after_failure() {
        let http = MockHttpClient::new();
        http.set_response(
            "https://api.test/videos/trending",
            MockResponse::Success(Response::new(500, bytes::Bytes::new())),
        );
        let mut app = app_with(&http, &InMemorySession::with_token("t"));
        app.start();
        app.navigate(Route::Trending);
        // home + trending
        while app.is_loading() {
            app.process_next_message().await;
        }
        let before = http.requests_to("https://api.test/videos/trending").len();
        assert_eq!(before, 1);

        app.retry();
        assert!(app.is_loading());
        app.process_next_message().await;
        assert_eq!(http.requests_to("https://api.test/videos/trending").len(), 2);
    }
}
