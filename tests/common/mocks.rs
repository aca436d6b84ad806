//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `nxtwatch::adapters::mock` and adds a builder
//! for the API responses the integration tests need.

pub use nxtwatch::adapters::mock::{InMemorySession, MockHttpClient, MockResponse};
pub use nxtwatch::traits::{HttpError, Response};

/// Builder for a [`MockHttpClient`] with canned responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

#[allow(dead_code)]
impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Standing JSON response for a URL.
    pub fn with_json_response(self, url: &str, status: u16, json: serde_json::Value) -> Self {
        self.client.set_response(url, MockResponse::json(status, json));
        self
    }

    /// Standing transport failure for a URL.
    pub fn with_network_error(self, url: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string())),
        );
        self
    }

    /// Default response for URLs without a specific match.
    pub fn with_default_status(self, status: u16) -> Self {
        self.client.set_default_response(MockResponse::status(status));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
