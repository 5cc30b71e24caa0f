// tests/http_fetch.rs
//
// HttpFetcher against a local mock directory.
//
use std::time::Duration;

use apgo_scrape::core::{Fetch, HttpFetcher};
use apgo_scrape::FetchError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIXTURE: &str = include_str!("fixtures/program.html");

/// The blocking client must not be built or dropped on a runtime thread.
async fn fetch(base: String, id: u32, timeout: Duration) -> Result<String, FetchError> {
    tokio::task::spawn_blocking(move || HttpFetcher::new(&base, timeout).unwrap().fetch(id))
        .await
        .unwrap()
}

async fn serve(server: &MockServer, id: u32, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/id/{id}")))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn ok_page_returns_body() {
    let server = MockServer::start().await;
    serve(&server, 12, ResponseTemplate::new(200).set_body_string(FIXTURE)).await;

    let body = fetch(server.uri(), 12, Duration::from_secs(5)).await.unwrap();
    assert!(body.contains("Example Program"));
}

#[tokio::test]
async fn not_authorized_marker_wins_over_status() {
    let server = MockServer::start().await;
    serve(&server, 1, ResponseTemplate::new(200).set_body_string("<h1>Not Authorized</h1>")).await;
    serve(&server, 2, ResponseTemplate::new(403).set_body_string("Not Authorized")).await;

    assert_eq!(fetch(server.uri(), 1, Duration::from_secs(5)).await, Err(FetchError::NotAuthorized));
    assert_eq!(fetch(server.uri(), 2, Duration::from_secs(5)).await, Err(FetchError::NotAuthorized));
}

#[tokio::test]
async fn error_status_is_reported() {
    let server = MockServer::start().await;
    serve(&server, 3, ResponseTemplate::new(500).set_body_string("oops")).await;

    assert_eq!(fetch(server.uri(), 3, Duration::from_secs(5)).await, Err(FetchError::Status(500)));
    // Unmounted path: wiremock answers 404.
    assert_eq!(fetch(server.uri(), 4, Duration::from_secs(5)).await, Err(FetchError::Status(404)));
}

#[tokio::test]
async fn slow_response_is_a_timeout() {
    let server = MockServer::start().await;
    serve(
        &server,
        5,
        ResponseTemplate::new(200)
            .set_body_string(FIXTURE)
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    assert_eq!(fetch(server.uri(), 5, Duration::from_millis(200)).await, Err(FetchError::Timeout));
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let result = fetch(format!("http://127.0.0.1:{port}"), 1, Duration::from_secs(5)).await;
    assert!(matches!(result, Err(FetchError::Transport(_))), "{result:?}");
}
