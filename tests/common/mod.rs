#![allow(dead_code)]

use std::sync::{Arc, Once};

use axum::{
    Router,
    extract::Path,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::Html,
    routing::get,
};
use qurl::services::fetcher::Fetcher;
use tokio::net::TcpListener;

pub const FIXTURE_PAGE: &str = r#"
<html>
    <head>
        <title>Page Title</title>
    </head>
    <body>
        <div class="classname">selector class content</div>
        <div id="idname">selector id content</div>
    </body>
</html>
"#;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("qurl=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Serves `router` on a random local port and returns its base address.
///
/// Returned address format: `http://127.0.0.1:8492`
async fn serve(router: Router) -> String {
    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://127.0.0.1:{port}")
}

/// Spawns the application wired to the network fetcher.
pub async fn spawn_app() -> String {
    init_tracing_once();
    let address = serve(qurl::app()).await;
    wait_until_ready(&address).await;
    address
}

/// Spawns the application wired to the given fetcher.
pub async fn spawn_app_with_fetcher(fetcher: Arc<dyn Fetcher>) -> String {
    init_tracing_once();
    let address = serve(qurl::app_with_fetcher(fetcher)).await;
    wait_until_ready(&address).await;
    address
}

async fn wait_until_ready(address: &str) {
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health-check"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }
}

/// Spawns an upstream server to be fetched by the application.
///
/// - `/` serves [`FIXTURE_PAGE`] with header `Fooo: bar`
/// - `/status/{code}` answers with the given status code
/// - `/content-type` echoes the request `Content-Type` header as body
pub async fn spawn_upstream() -> String {
    let router = Router::new()
        .route("/", get(|| async { ([("Fooo", "bar")], Html(FIXTURE_PAGE)) }))
        .route(
            "/status/{code}",
            get(|Path(code): Path<u16>| async move {
                StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
            }),
        )
        .route(
            "/content-type",
            get(|headers: HeaderMap| async move {
                headers
                    .get(CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            }),
        );

    serve(router).await
}

/// Returns an address nothing is listening on.
pub fn unreachable_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
