//! [`HttpClient`] over reqwest.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Production HTTP client.
///
/// No request timeout is configured: a hung request stays pending until the
/// network layer gives up, and the screen that issued it stays loading.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a preconfigured client (proxy, user agent, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn execute(&self, request: RequestBuilder, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(request, |request, (name, value)| request.header(name, value));

        let response = request.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Body(e.to_string()))?;

        Ok(Response::new(status, body))
    }
}

fn classify(err: reqwest::Error) -> HttpError {
    let message = err.to_string();
    if err.is_builder() {
        HttpError::InvalidRequest(message)
    } else if err.is_timeout() {
        HttpError::Timeout(message)
    } else if err.is_connect() {
        HttpError::ConnectionFailed(message)
    } else {
        HttpError::Other(message)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.execute(self.client.get(url), headers).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.execute(self.client.post(url).body(body.to_owned()), headers)
            .await
    }
}
