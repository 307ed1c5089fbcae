//! Test-only helpers shared by unit tests across modules.

use wiremock::MockServer;

/// Starts a wiremock server, or returns `None` when the environment
/// forbids binding loopback sockets (sandboxed CI).
///
/// Callers should early-return when `None` is yielded so the test is
/// skipped rather than failed:
///
/// ```ignore
/// let Some(mock_server) = start_mock_server_or_skip().await else {
///     return;
/// };
/// ```
pub(crate) async fn start_mock_server_or_skip() -> Option<MockServer> {
    match tokio::net::TcpListener::bind(("127.0.0.1", 0)).await {
        Ok(probe) => {
            drop(probe);
            Some(MockServer::start().await)
        }
        Err(e) => {
            eprintln!("skipping test: cannot bind loopback socket ({e})");
            None
        }
    }
}
