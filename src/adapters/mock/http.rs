//! Scripted [`HttpClient`] for tests.
//!
//! Responses are keyed by URL. Every request is recorded so tests can assert
//! on what the API client sent, including the bearer header.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// One request as the mock saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// `GET` or `POST`
    pub method: String,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

/// What the mock does for a matched URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Answer with this response, whatever its status
    Success(Response),
    /// Fail without a response
    Error(HttpError),
    /// Sleep, then behave like the inner script
    Delayed(Duration, Box<MockResponse>),
}

impl MockResponse {
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }

    /// Empty body.
    pub fn status(status: u16) -> Self {
        MockResponse::Success(Response::new(status, bytes::Bytes::new()))
    }

    pub fn delayed(self, delay: Duration) -> Self {
        MockResponse::Delayed(delay, Box::new(self))
    }
}

#[derive(Debug, Default)]
struct Script {
    standing: HashMap<String, MockResponse>,
    once: HashMap<String, VecDeque<MockResponse>>,
    fallback: Option<MockResponse>,
    log: Vec<RecordedRequest>,
}

impl Script {
    /// One-shot queue, exact URL, longest standing prefix, then the fallback.
    fn next_for(&mut self, url: &str) -> Option<MockResponse> {
        if let Some(response) = self.once.get_mut(url).and_then(VecDeque::pop_front) {
            return Some(response);
        }
        if let Some(response) = self.standing.get(url) {
            return Some(response.clone());
        }
        // Longest wins so "/videos/all" does not shadow "/videos/all?search=x"
        self.standing
            .iter()
            .filter(|(prefix, _)| url.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, response)| response.clone())
            .or_else(|| self.fallback.clone())
    }
}

/// Mock HTTP client; clones share one script and one request log.
///
/// ```ignore
/// use nxtwatch::adapters::mock::{MockHttpClient, MockResponse};
///
/// let http = MockHttpClient::new();
/// http.set_response(
///     "https://apis.ccbp.in/videos/gaming",
///     MockResponse::json(200, serde_json::json!({"videos": []})),
/// );
/// http.push_response("https://apis.ccbp.in/videos/gaming", MockResponse::status(500));
/// // first GET fails with 500, every later one gets the empty listing
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<Script>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap()
    }

    /// Answer every request to `url` (or a URL starting with it).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.script().standing.insert(url.to_string(), response);
    }

    /// Answer the next request to exactly `url`, ahead of any standing response.
    pub fn push_response(&self, url: &str, response: MockResponse) {
        self.script()
            .once
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// Answer requests nothing else matches.
    pub fn set_default_response(&self, response: MockResponse) {
        self.script().fallback = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.script().log.clone()
    }

    pub fn requests_to(&self, url: &str) -> Vec<RecordedRequest> {
        self.script()
            .log
            .iter()
            .filter(|r| r.url == url)
            .cloned()
            .collect()
    }

    pub fn clear_requests(&self) {
        self.script().log.clear();
    }

    pub fn clear_responses(&self) {
        let mut script = self.script();
        script.standing.clear();
        script.once.clear();
        script.fallback = None;
    }

    async fn handle(
        &self,
        method: &str,
        url: &str,
        headers: &Headers,
        body: Option<&str>,
    ) -> Result<Response, HttpError> {
        // Lock released before any delay is awaited
        let scripted = {
            let mut script = self.script();
            script.log.push(RecordedRequest {
                method: method.to_string(),
                url: url.to_string(),
                headers: headers.clone(),
                body: body.map(str::to_string),
            });
            script.next_for(url)
        };

        let mut next = scripted
            .ok_or_else(|| HttpError::Other(format!("No mock response for URL: {}", url)))?;
        loop {
            next = match next {
                MockResponse::Success(response) => return Ok(response),
                MockResponse::Error(err) => return Err(err),
                MockResponse::Delayed(delay, inner) => {
                    tokio::time::sleep(delay).await;
                    *inner
                }
            };
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("GET", url, headers, None).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("POST", url, headers, Some(body)).await
    }
}
