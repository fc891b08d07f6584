mod common;

use common::http_mock::{mount_stream, mount_token_endpoint, sample_items, STREAM_PATH};
use common::Operator;
use feedfilter::feed::FeedClient;
use feedfilter::{filter_headlines, parse_keywords, FeedFilterError, Headline, Runtime, TokenPair, TokenStore};
use wiremock::matchers::{header, method, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STREAM: &str = "user/-/label/Global";

/// Items come back with the bearer header and count parameter
#[tokio::test]
async fn fetch_items_sends_bearer_and_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(STREAM_PATH))
        .and(header("authorization", "Bearer A1"))
        .and(query_param("n", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_items()))
        .expect(1)
        .mount(&server)
        .await;

    let client = FeedClient::new(&format!("{}/api", server.uri()), reqwest::Client::new()).unwrap();
    let items = client.fetch_items("A1", STREAM, 20).await.unwrap();
    let headlines: Vec<Headline> = items.iter().map(|i| i.headline()).collect();
    assert_eq!(
        headlines,
        vec![
            Headline::new("Cyber Attack Report", Some("https://news.example.com/cyber".into())),
            Headline::new("Weather Today", Some("https://news.example.com/weather".into())),
        ]
    );
}

/// Extracted then filtered feed titles
#[tokio::test]
async fn fetched_titles_filter_by_keyword() {
    let server = MockServer::start().await;
    mount_stream(&server, "A1", 200, sample_items()).await;

    let client = FeedClient::new(&format!("{}/api", server.uri()), reqwest::Client::new()).unwrap();
    let items = client.fetch_items("A1", STREAM, 20).await.unwrap();
    let matched = filter_headlines(
        items.iter().map(|i| i.headline()).collect(),
        &parse_keywords("cyber"),
    );
    assert_eq!(
        matched,
        vec![Headline::new(
            "Cyber Attack Report",
            Some("https://news.example.com/cyber".into())
        )]
    );
}

/// A payload without items is an empty list; garbage is a parse error
#[tokio::test]
async fn empty_and_malformed_payloads() {
    let server = MockServer::start().await;
    mount_stream(&server, "empty", 200, serde_json::json!({"id": "x"})).await;
    Mock::given(method("GET"))
        .and(path_regex(STREAM_PATH))
        .and(header("authorization", "Bearer garbage"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = FeedClient::new(&format!("{}/api", server.uri()), reqwest::Client::new()).unwrap();
    assert!(client.fetch_items("empty", STREAM, 20).await.unwrap().is_empty());
    let err = client.fetch_items("garbage", STREAM, 20).await.unwrap_err();
    assert_eq!(err.code(), "parse_error");
}

/// 401, refresh, then 200 on the single retry
#[tokio::test]
async fn unauthorized_triggers_refresh_and_retry() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::mock_config(&server.uri(), dir.path());
    let store = TokenStore::new(config.token_path.clone());
    store.save(&TokenPair::new("A0", "R0")).unwrap();

    mount_stream(&server, "A0", 401, serde_json::json!({"error": "expired"})).await;
    mount_stream(&server, "A1", 200, sample_items()).await;
    mount_token_endpoint(
        &server,
        "refresh_token",
        200,
        serde_json::json!({"access_token": "A1", "refresh_token": "R1"}),
        1,
    )
    .await;

    let mut runtime = Runtime::new(&config).unwrap();
    let items = runtime.fetch_items("A0", STREAM, 20).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(store.load(), Some(TokenPair::new("A1", "R1")));
}

/// Sign in from the stored pair, then fetch through the runtime
#[tokio::test]
async fn sign_in_then_fetch_refreshes_stale_token() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::mock_config(&server.uri(), dir.path());
    TokenStore::new(config.token_path.clone())
        .save(&TokenPair::new("A0", "R0"))
        .unwrap();

    mount_stream(&server, "A0", 401, serde_json::json!({})).await;
    mount_stream(&server, "A1", 200, sample_items()).await;
    mount_token_endpoint(
        &server,
        "refresh_token",
        200,
        serde_json::json!({"access_token": "A1", "refresh_token": "R1"}),
        1,
    )
    .await;

    let mut runtime = Runtime::new(&config).unwrap();
    runtime.sign_in(&Operator::Denies).await.unwrap();
    assert_eq!(runtime.fetch(STREAM, 20).await.unwrap().len(), 2);
    // The refreshed token is reused; no second refresh.
    assert_eq!(runtime.fetch(STREAM, 20).await.unwrap().len(), 2);
}

/// A second 401 after refreshing is final
#[tokio::test]
async fn second_unauthorized_is_terminal() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::mock_config(&server.uri(), dir.path());
    TokenStore::new(config.token_path.clone())
        .save(&TokenPair::new("A0", "R0"))
        .unwrap();

    mount_stream(&server, "A0", 401, serde_json::json!({})).await;
    mount_stream(&server, "A1", 401, serde_json::json!({})).await;
    mount_token_endpoint(
        &server,
        "refresh_token",
        200,
        serde_json::json!({"access_token": "A1", "refresh_token": "R1"}),
        1,
    )
    .await;

    let mut runtime = Runtime::new(&config).unwrap();
    let err = runtime.fetch_items("A0", STREAM, 20).await.unwrap_err();
    assert!(err.is_unauthorized(), "got {err:?}");
}

/// 401 with nothing stored cannot refresh
#[tokio::test]
async fn unauthorized_without_stored_token() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::mock_config(&server.uri(), dir.path());

    mount_stream(&server, "A0", 401, serde_json::json!({})).await;
    mount_token_endpoint(&server, "refresh_token", 200, serde_json::json!({}), 0).await;

    let mut runtime = Runtime::new(&config).unwrap();
    let err = runtime.fetch_items("A0", STREAM, 20).await.unwrap_err();
    assert!(matches!(err, FeedFilterError::AuthRequired));
}

/// Refresh rejected: AuthError, stored pair unchanged, no retry
#[tokio::test]
async fn refresh_rejected_after_unauthorized() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::mock_config(&server.uri(), dir.path());
    let store = TokenStore::new(config.token_path.clone());
    store.save(&TokenPair::new("A0", "R0")).unwrap();

    Mock::given(method("GET"))
        .and(path_regex(STREAM_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    mount_token_endpoint(
        &server,
        "refresh_token",
        400,
        serde_json::json!({"error": "invalid_grant"}),
        1,
    )
    .await;

    let mut runtime = Runtime::new(&config).unwrap();
    let err = runtime.fetch_items("A0", STREAM, 20).await.unwrap_err();
    assert_eq!(err.code(), "auth_error");
    assert_eq!(store.load(), Some(TokenPair::new("A0", "R0")));
}

/// Non-401 failures are not retried
#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::mock_config(&server.uri(), dir.path());
    TokenStore::new(config.token_path.clone())
        .save(&TokenPair::new("A0", "R0"))
        .unwrap();

    Mock::given(method("GET"))
        .and(path_regex(STREAM_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;
    mount_token_endpoint(&server, "refresh_token", 200, serde_json::json!({}), 0).await;

    let mut runtime = Runtime::new(&config).unwrap();
    let err = runtime.fetch_items("A0", STREAM, 20).await.unwrap_err();
    match err {
        FeedFilterError::HttpError { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected HttpError, got {other:?}"),
    }
}

/// Fetching before signing in is an auth error, not a request
#[tokio::test]
async fn fetch_before_sign_in() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::mock_config(&server.uri(), dir.path());

    let mut runtime = Runtime::new(&config).unwrap();
    let err = runtime.fetch(STREAM, 20).await.unwrap_err();
    assert!(matches!(err, FeedFilterError::AuthRequired));
}
