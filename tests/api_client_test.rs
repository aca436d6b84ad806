//! Video API client tests against a local HTTP server using wiremock.
//!
//! These exercise the real reqwest adapter end to end: request paths, the
//! bearer header, the search query and how error statuses surface.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{detail_body, video_json, videos_body, InMemorySession};
use nxtwatch::adapters::{FileSessionStore, ReqwestHttpClient};
use nxtwatch::api::VideoApi;
use nxtwatch::auth::sign_in;
use nxtwatch::error::{AuthError, FetchError};
use nxtwatch::models::Category;
use nxtwatch::traits::SessionStore;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_token() -> String {
    "test-auth-token".to_string()
}

fn api_for(server: &MockServer, session: &InMemorySession) -> VideoApi {
    VideoApi::new(
        server.uri(),
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(session.clone()),
    )
}

#[tokio::test]
async fn test_login_posts_credentials_and_returns_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({
            "username": "rahul",
            "password": "rahul@2021"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"jwt_token": "jwt-1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, &InMemorySession::new());
    let token = api.login("rahul", "rahul@2021").await.unwrap();

    assert_eq!(token, "jwt-1");
}

#[tokio::test]
async fn test_login_rejection_carries_error_msg() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "status_code": 400,
            "error_msg": "invalid username"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server, &InMemorySession::new());
    let err = api.login("nobody", "x").await.unwrap_err();

    assert_eq!(
        err,
        AuthError::Rejected {
            status: 400,
            message: "invalid username".to_string()
        }
    );
}

#[tokio::test]
async fn test_sign_in_persists_token_to_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"jwt_token": "jwt-2"})),
        )
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(FileSessionStore::new(temp_dir.path()));
    let api = VideoApi::new(server.uri(), Arc::new(ReqwestHttpClient::new()), store.clone());

    sign_in(&api, store.as_ref(), Duration::from_secs(60), "rahul", "pw")
        .await
        .unwrap();

    assert_eq!(store.get().as_deref(), Some("jwt-2"));
    assert!(store.path().exists());
}

#[tokio::test]
async fn test_home_listing_sends_bearer_and_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos/all"))
        .and(query_param("search", "ib hubs"))
        .and(header("Authorization", format!("Bearer {}", test_token())))
        .respond_with(ResponseTemplate::new(200).set_body_json(videos_body(vec![video_json(
            "v1",
            "iB Hubs Announcement",
            "26000",
            "Nov 29, 2016",
        )])))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, &InMemorySession::with_token(&test_token()));
    let videos = api.list_videos(Category::All, Some("ib hubs")).await.unwrap();

    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id, "v1");
    assert_eq!(videos[0].channel_name.as_deref(), Some("iB Cricket"));
}

#[tokio::test]
async fn test_home_listing_without_term_sends_empty_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos/all"))
        .and(query_param("search", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(videos_body(vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server, &InMemorySession::with_token(&test_token()));
    let videos = api.list_videos(Category::All, None).await.unwrap();

    assert!(videos.is_empty());
}

#[tokio::test]
async fn test_gaming_listing_accepts_numeric_view_counts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos/gaming"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total": 1,
            "videos": [{
                "id": "g1",
                "title": "Drop 1",
                "thumbnail_url": "https://assets.test/g1.png",
                "view_count": 5400000
            }]
        })))
        .mount(&server)
        .await;

    let api = api_for(&server, &InMemorySession::with_token(&test_token()));
    let videos = api.list_videos(Category::Gaming, None).await.unwrap();

    assert_eq!(videos[0].view_count, "5400000");
    assert!(videos[0].channel_name.is_none());
}

#[tokio::test]
async fn test_unauthorized_listing_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos/trending"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error_msg": "Invalid JWT Token"
        })))
        .mount(&server)
        .await;

    let api = api_for(&server, &InMemorySession::new());
    let err = api.list_videos(Category::Trending, None).await.unwrap_err();

    assert_eq!(err, FetchError::Status { status: 401 });
}

#[tokio::test]
async fn test_detail_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos/ad9822d2"))
        .and(header("Authorization", format!("Bearer {}", test_token())))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(detail_body("ad9822d2", "iB Hubs Anniversary")),
        )
        .mount(&server)
        .await;

    let api = api_for(&server, &InMemorySession::with_token(&test_token()));
    let detail = api.get_video("ad9822d2").await.unwrap();

    assert_eq!(detail.id(), "ad9822d2");
    assert_eq!(detail.summary.title, "iB Hubs Anniversary");
    assert_eq!(detail.subscriber_count, "1000000");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let api = VideoApi::new(
        uri,
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(InMemorySession::new()),
    );
    let err = api.list_videos(Category::Trending, None).await.unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
}
