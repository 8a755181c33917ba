mod common;

use common::{FIXTURE_PAGE, spawn_upstream, unreachable_address};
use qurl::services::fetcher::{FetchError, Fetcher, HttpFetcher};

#[test_log::test(tokio::test)]
async fn http_fetcher_returns_unread_response() {
    let upstream = spawn_upstream().await;
    let fetcher = HttpFetcher::new();

    let response = fetcher.fetch(&upstream).await.expect("Fetch should succeed");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.headers()["fooo"], "bar");
    assert_eq!(response.text().await.unwrap(), FIXTURE_PAGE);
}

#[test_log::test(tokio::test)]
async fn http_fetcher_sends_json_content_type() {
    let upstream = spawn_upstream().await;
    let fetcher = HttpFetcher::new();

    let response = fetcher
        .fetch(&format!("{upstream}/content-type"))
        .await
        .expect("Fetch should succeed");

    assert_eq!(response.text().await.unwrap(), "application/json");
}

#[test_log::test(tokio::test)]
async fn http_fetcher_reports_connection_failure() {
    let fetcher = HttpFetcher::new();

    let result = fetcher.fetch(&unreachable_address()).await;

    assert!(matches!(result, Err(FetchError::Transport(e)) if e.is_connect()));
}

#[test_log::test(tokio::test)]
async fn http_fetcher_reports_request_construction_failure() {
    let fetcher = HttpFetcher::new();

    let result = fetcher.fetch("not a url").await;

    assert!(matches!(result, Err(FetchError::Transport(e)) if e.is_builder()));
}
