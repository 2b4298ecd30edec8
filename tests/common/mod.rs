//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use tokio::net::TcpListener;

use httpmock::MockServer;
use venue_gateway::{GatewayConfig, HttpServer, Shutdown};

/// A gateway serving on an ephemeral local port. Stops when dropped.
pub struct TestGateway {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestGateway {
    pub async fn start(config: GatewayConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = HttpServer::new(config).expect("gateway state builds");
        let shutdown = Shutdown::new();
        let server_shutdown = shutdown.subscribe();

        tokio::spawn(async move {
            let _ = server.run(listener, server_shutdown).await;
        });

        Self { addr, shutdown }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestGateway {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// HTTP client that never goes through a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Default config with every upstream pointed at `server`. No credentials.
pub fn config_for(server: &MockServer) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.listener.bind_host = "127.0.0.1".into();
    config.listener.port = 0;
    config.cities.api_url = Some(server.url("/v1/geo/cities"));
    config.cities.api_host = "geo.test".into();
    config.venues.list_url = server.url("/activity-public/list/location");
    config.venues.site_url = server.base_url();
    config.email.send_url = server.url("/api/v1.0/email/send");
    config
}

/// An address nothing is listening on.
pub async fn closed_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
