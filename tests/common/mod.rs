//! Shared utilities for integration tests.

use std::net::SocketAddr;

use routing_showcase::config::ServerConfig;
use routing_showcase::http::HttpServer;
use routing_showcase::lifecycle::Shutdown;

/// A showcase server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    #[allow(dead_code)]
    pub fn ws_url(&self, path: &str) -> String {
        format!("ws://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the server with the default config.
pub async fn start_server() -> TestServer {
    start_server_with(ServerConfig::default()).await
}

/// Start the server with a custom config. The listener is bound before this
/// returns, so requests can be sent immediately.
pub async fn start_server_with(config: ServerConfig) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer { addr, shutdown }
}

#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
