use std::sync::Arc;

use crate::error::{AuthError, FetchError, GENERIC_LOGIN_MESSAGE};
use crate::models::{Category, VideoDetail, VideoSummary};
use crate::traits::{Headers, HttpClient, Response, SessionStore};

use super::payloads::{LoginRequest, LoginResponse, VideoDetailsResponse, VideosResponse};

/// Default base URL of the video API.
pub const DEFAULT_API_URL: &str = "https://apis.ccbp.in";

/// Client for the video API.
///
/// Listing and detail calls read the token from the session store on every
/// request, so a login or logout takes effect immediately.
#[derive(Clone)]
pub struct VideoApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
    session: Arc<dyn SessionStore>,
}

impl VideoApi {
    pub fn new(
        base_url: impl Into<String>,
        http: Arc<dyn HttpClient>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the listing endpoint for `category`.
    ///
    /// `all` always carries a `search` parameter, empty when there is no term.
    pub fn listing_url(&self, category: Category, search: Option<&str>) -> String {
        match category {
            Category::All => format!(
                "{}/videos/all?search={}",
                self.base_url,
                urlencoding::encode(search.unwrap_or_default())
            ),
            other => format!("{}/videos/{}", self.base_url, other.path_segment()),
        }
    }

    pub fn detail_url(&self, id: &str) -> String {
        format!("{}/videos/{}", self.base_url, urlencoding::encode(id))
    }

    /// Bearer header from the stored token.
    ///
    /// A missing token leaves the header out; the request is still sent.
    fn auth_headers(&self) -> Headers {
        let mut headers = Headers::new();
        if let Some(token) = self.session.get() {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    /// Exchange credentials for a token.
    ///
    /// POST /login
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let url = format!("{}/login", self.base_url);
        let body = serde_json::to_string(&LoginRequest { username, password }).map_err(|e| {
            AuthError::Network {
                message: e.to_string(),
            }
        })?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        tracing::debug!(%url, "POST login");
        let response = self.http.post(&url, &body, &headers).await.map_err(|e| {
            tracing::warn!(error = %e, "login request failed");
            AuthError::from(e)
        })?;

        // Any status: a body that is not JSON at all is a network failure
        let parsed: LoginResponse = response.json().map_err(|e| {
            tracing::warn!(status = response.status, error = %e, "login body is not JSON");
            tracing::debug!(body = %response.body_preview(), "login body");
            AuthError::Network {
                message: e.to_string(),
            }
        })?;

        if !response.is_success() {
            let message = parsed
                .error_msg
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_LOGIN_MESSAGE.to_string());
            tracing::warn!(status = response.status, %message, "login rejected");
            tracing::debug!(body = %response.body_preview(), "login error body");
            return Err(AuthError::Rejected {
                status: response.status,
                message,
            });
        }

        parsed.jwt_token.ok_or_else(|| AuthError::Rejected {
            status: response.status,
            message: GENERIC_LOGIN_MESSAGE.to_string(),
        })
    }

    /// Fetch a listing.
    ///
    /// GET /videos/all?search=<term> | /videos/trending | /videos/gaming
    pub async fn list_videos(
        &self,
        category: Category,
        search: Option<&str>,
    ) -> Result<Vec<VideoSummary>, FetchError> {
        let url = self.listing_url(category, search);
        let response = self.get(&url).await?;
        let wrapper: VideosResponse = response.json()?;
        Ok(wrapper.videos.into_iter().map(VideoSummary::from).collect())
    }

    /// Fetch a single video.
    ///
    /// GET /videos/:id
    pub async fn get_video(&self, id: &str) -> Result<VideoDetail, FetchError> {
        let url = self.detail_url(id);
        let response = self.get(&url).await?;
        let wrapper: VideoDetailsResponse = response.json()?;
        Ok(wrapper.video_details.into())
    }

    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url, &self.auth_headers())
            .await
            .map_err(|e| {
                tracing::warn!(%url, error = %e, "request failed");
                FetchError::from(e)
            })?;

        if !response.is_success() {
            tracing::warn!(%url, status = response.status, "request returned error status");
            tracing::debug!(body = %response.body_preview(), "error body");
            return Err(FetchError::Status {
                status: response.status,
            });
        }
        Ok(response)
    }
}

impl std::fmt::Debug for VideoApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
