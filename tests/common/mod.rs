//! Shared test utilities and fixtures for integration tests.

#![allow(dead_code)]

pub mod mocks;

use std::sync::Arc;

use nxtwatch::api::VideoApi;
use nxtwatch::app::App;
use nxtwatch::config::AppConfig;
use ratatui::{backend::TestBackend, Terminal};

pub use mocks::*;

/// Base URL every test app talks to.
pub const TEST_API: &str = "https://api.test";

/// Full URL of an API path on [`TEST_API`].
pub fn api_url(path: &str) -> String {
    format!("{}{}", TEST_API, path)
}

/// One listing entry in the wire format.
pub fn video_json(id: &str, title: &str, views: &str, published_at: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "thumbnail_url": format!("https://assets.test/{}.png", id),
        "channel": {
            "name": "iB Cricket",
            "profile_image_url": "https://assets.test/channel.png"
        },
        "view_count": views,
        "published_at": published_at
    })
}

/// A `{"videos": [...]}` listing body.
pub fn videos_body(videos: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({ "videos": videos })
}

/// A `{"video_details": {...}}` body for `id`.
pub fn detail_body(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "video_details": {
            "id": id,
            "title": title,
            "video_url": "https://www.youtube.com/watch?v=pT2ojWWjum8",
            "thumbnail_url": "https://assets.test/thumb.png",
            "channel": {
                "name": "iB Hubs",
                "profile_image_url": "https://assets.test/hubs.png",
                "subscriber_count": "1000000"
            },
            "view_count": "26000",
            "published_at": "Nov 29, 2016",
            "description": "iB Hubs grandly celebrated its first anniversary."
        }
    })
}

/// Builder for an [`App`] wired to mock adapters.
pub struct TestAppBuilder {
    http: MockHttpClient,
    session: InMemorySession,
    width: u16,
    height: u16,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            http: MockHttpClient::new(),
            session: InMemorySession::new(),
            width: 120,
            height: 40,
        }
    }

    pub fn with_http(mut self, http: MockHttpClient) -> Self {
        self.http = http;
        self
    }

    pub fn with_session(mut self, session: InMemorySession) -> Self {
        self.session = session;
        self
    }

    /// Start already signed in.
    pub fn authenticated(self) -> Self {
        self.with_session(InMemorySession::with_token("test-token"))
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Build the app without mounting anything.
    pub fn build(self) -> App {
        let api = VideoApi::new(
            TEST_API,
            Arc::new(self.http.clone()),
            Arc::new(self.session.clone()),
        );
        let mut app = App::new(api, Arc::new(self.session), &AppConfig::default());
        app.update_terminal_dimensions(self.width, self.height);
        app
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw `app` on a test backend and return the buffer as text, one line per row.
pub fn render_to_string(app: &App) -> String {
    let backend = TestBackend::new(app.terminal_width, app.terminal_height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| nxtwatch::ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
