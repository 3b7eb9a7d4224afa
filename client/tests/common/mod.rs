//! Shared setup for the adapter integration tests.

use std::time::Duration;

use brawl_client::ClientConfig;
use tracing_subscriber::EnvFilter;

pub const PLAYER_TAG: &str = mock_server::PLAYER_TAG;
pub const CLUB_TAG: &str = mock_server::CLUB_TAG;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Start the mock server on a random port and return its base URL.
///
/// The server runs on its own thread and runtime so blocking tests can use
/// it without a runtime of their own.
pub fn spawn_mock_server() -> String {
    init_tracing();

    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// A base URL nothing listens on. Any request sent there fails as a
/// transport error, so a validation error proves no request went out.
pub fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// A listener that accepts connections but never writes a byte back.
///
/// Keep the returned listener alive for as long as requests should hang.
pub fn silent_server() -> (std::net::TcpListener, String) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, format!("http://{addr}"))
}

pub fn config(base_url: &str) -> ClientConfig {
    ClientConfig::new("test-token")
        .with_base_url(base_url)
        .with_constants_url(&format!("{base_url}/constants"))
        .with_timeout(Duration::from_secs(30))
}

pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}
