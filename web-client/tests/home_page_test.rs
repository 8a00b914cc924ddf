use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower::util::ServiceExt;
use web_client::config::BackendSettings;
use web_client::services::BackendClient;
use web_client::startup::build_router;
use web_client::AppState;
use wiremock::matchers::{header as header_matcher, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app(greeting_base_url: &str, profile_base_url: &str) -> Router {
    let backends = BackendClient::new(&BackendSettings {
        greeting_base_url: greeting_base_url.to_string(),
        profile_base_url: profile_base_url.to_string(),
        timeout_secs: 5,
    })
    .expect("Failed to build backend client");

    build_router(AppState::new(Arc::new(backends)))
}

async fn render(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response: Response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get_root() -> Request<Body> {
    Request::builder().uri("/").body(Body::empty()).unwrap()
}

async fn greeting_backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "msg": "Hello World" })),
        )
        .mount(&server)
        .await;
    server
}

async fn profile_backend(users: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/fetch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn renders_greeting_and_every_profile() {
    let greeting = greeting_backend().await;
    let profile = profile_backend(serde_json::json!([
        { "id": "65f0c0ffee0000000000aaaa", "name": "Alice", "age": 30, "createdAt": "2024-03-01T10:00:00Z" },
        { "id": "65f0c0ffee0000000000bbbb", "name": "Bob", "age": 41.5, "createdAt": "2024-03-01T10:05:00Z" }
    ]))
    .await;

    let (status, html) = render(app(&greeting.uri(), &profile.uri()), get_root()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Hello World</h1>"));
    assert!(html.contains("<h2>Profile</h2>"));
    assert!(html.contains("Name: Alice"));
    assert!(html.contains("Age: 30"));
    assert!(html.contains("Name: Bob"));
    assert!(html.contains("Age: 41.5"));
    assert!(html.find("Name: Alice") < html.find("Name: Bob"));
}

#[tokio::test]
async fn page_is_not_cached() {
    let greeting = greeting_backend().await;
    let profile = profile_backend(serde_json::json!([])).await;

    let response = app(&greeting.uri(), &profile.uri())
        .oneshot(get_root())
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "no-store, no-cache, must-revalidate, private"
    );
}

#[tokio::test]
async fn profile_names_are_html_escaped() {
    let greeting = greeting_backend().await;
    let profile = profile_backend(serde_json::json!([
        { "name": "<script>alert(1)</script>", "age": 9 }
    ]))
    .await;

    let (_, html) = render(app(&greeting.uri(), &profile.uri()), get_root()).await;

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn failed_greeting_leaves_heading_empty() {
    let greeting = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&greeting)
        .await;
    let profile = profile_backend(serde_json::json!([{ "name": "Alice", "age": 30 }])).await;

    let (status, html) = render(app(&greeting.uri(), &profile.uri()), get_root()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1></h1>"));
    assert!(html.contains("Name: Alice"));
}

#[tokio::test]
async fn malformed_profiles_leave_list_empty() {
    let greeting = greeting_backend().await;
    // The profile service's legacy "doesn't exist" object is not a list.
    let profile = profile_backend(serde_json::json!({ "msg": "User doesn't exist" })).await;

    let (status, html) = render(app(&greeting.uri(), &profile.uri()), get_root()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Hello World</h1>"));
    assert!(!html.contains("Name:"));
}

#[tokio::test]
async fn unreachable_backends_still_render() {
    // Nothing listens on port 9 (discard) in the test environment.
    let (status, html) = render(app("http://127.0.0.1:9", "http://127.0.0.1:9"), get_root()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1></h1>"));
    assert!(!html.contains("Name:"));
}

#[tokio::test]
async fn backends_are_fetched_concurrently() {
    let delay = Duration::from_millis(500);

    let greeting = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "msg": "Hello World" }))
                .set_delay(delay),
        )
        .mount(&greeting)
        .await;

    let profile = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/fetch"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(delay),
        )
        .mount(&profile)
        .await;

    let started = Instant::now();
    let (status, _) = render(app(&greeting.uri(), &profile.uri()), get_root()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        started.elapsed() < delay * 2,
        "fetches ran sequentially: {:?}",
        started.elapsed()
    );
}

#[tokio::test]
async fn request_id_is_forwarded_to_backends() {
    let greeting = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header_matcher("x-request-id", "page-load-7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "msg": "Traced" })),
        )
        .expect(1)
        .mount(&greeting)
        .await;
    let profile = profile_backend(serde_json::json!([])).await;

    let request = Request::builder()
        .uri("/")
        .header("x-request-id", "page-load-7")
        .body(Body::empty())
        .unwrap();
    let (_, html) = render(app(&greeting.uri(), &profile.uri()), request).await;

    assert!(html.contains("<h1>Traced</h1>"));
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, body) = render(
        app("http://127.0.0.1:9", "http://127.0.0.1:9"),
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&body).unwrap(),
        serde_json::json!({ "status": "OK" })
    );
}
