use wiremock::matchers::{body_string_contains, header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN_PATH: &str = "/oauth2/token";
pub const STREAM_PATH: &str = r"^/api/stream/contents/.+$";

/// Token endpoint answering `grant_type` requests with `status` and `body`.
#[allow(dead_code)]
pub async fn mount_token_endpoint(
    server: &MockServer,
    grant_type: &str,
    status: u16,
    body: serde_json::Value,
    expected_calls: u64,
) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains(format!("grant_type={grant_type}")))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Stream-contents endpoint answering requests that carry `access_token`.
#[allow(dead_code)]
pub async fn mount_stream(
    server: &MockServer,
    access_token: &str,
    status: u16,
    body: serde_json::Value,
) {
    Mock::given(method("GET"))
        .and(path_regex(STREAM_PATH))
        .and(header(
            "authorization",
            format!("Bearer {access_token}").as_str(),
        ))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[allow(dead_code)]
pub fn sample_items() -> serde_json::Value {
    serde_json::json!({
        "direction": "ltr",
        "id": "user/1005921515/label/Global",
        "items": [
            {
                "title": "Cyber Attack Report",
                "canonical": [{"href": "https://news.example.com/cyber"}]
            },
            {
                "title": "Weather Today",
                "canonical": [{"href": "https://news.example.com/weather"}]
            }
        ]
    })
}
