//! Shared HTTP client and the bundle of upstream clients handed to handlers.

use std::future::Future;
use std::time::Instant;

use crate::config::GatewayConfig;
use crate::observability::metrics;
use crate::upstream::{CityClient, EmailClient, UpstreamResult, VenueClient};

/// All upstream clients, sharing one connection pool.
#[derive(Clone)]
pub struct Upstreams {
    pub cities: CityClient,
    pub venues: VenueClient,
    pub email: EmailClient,
}

impl Upstreams {
    /// Build the clients from configuration.
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("venue-gateway/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            cities: CityClient::new(http.clone(), config.cities.clone()),
            venues: VenueClient::new(http.clone(), config.venues.clone()),
            email: EmailClient::new(http, config.email.clone()),
        })
    }
}

/// Await an upstream call and record its outcome and latency.
pub(crate) async fn timed<T, F>(service: &'static str, call: F) -> UpstreamResult<T>
where
    F: Future<Output = UpstreamResult<T>>,
{
    let start = Instant::now();
    let result = call.await;
    let outcome = if result.is_ok() { "ok" } else { "error" };
    metrics::record_upstream(service, outcome, start);
    result
}
