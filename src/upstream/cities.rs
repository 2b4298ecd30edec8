//! City search upstream.

use serde::Deserialize;

use crate::config::CitySearchConfig;
use crate::data::City;
use crate::upstream::client::timed;
use crate::upstream::{UpstreamError, UpstreamResult};

const SERVICE: &str = "cities";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Vec<GeoCity>,
}

#[derive(Debug, Deserialize)]
struct GeoCity {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl From<GeoCity> for City {
    fn from(city: GeoCity) -> Self {
        Self {
            name: city.name,
            lat: city.latitude,
            lng: city.longitude,
        }
    }
}

#[derive(Clone)]
pub struct CityClient {
    http: reqwest::Client,
    config: CitySearchConfig,
}

impl CityClient {
    pub fn new(http: reqwest::Client, config: CitySearchConfig) -> Self {
        Self { http, config }
    }

    /// Cities whose name starts with `prefix`, most populous first.
    pub async fn search(&self, api_key: &str, prefix: &str) -> UpstreamResult<Vec<City>> {
        timed(SERVICE, self.fetch(api_key, prefix)).await
    }

    async fn fetch(&self, api_key: &str, prefix: &str) -> UpstreamResult<Vec<City>> {
        let endpoint = self.config.endpoint();
        let limit = self.config.limit.to_string();

        tracing::debug!(endpoint = %endpoint, prefix = %prefix, "Searching cities upstream");

        let response = self
            .http
            .get(&endpoint)
            .query(&[
                ("namePrefix", prefix),
                ("limit", limit.as_str()),
                ("sort", "-population"),
            ])
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", &self.config.api_host)
            .send()
            .await
            .map_err(UpstreamError::Transport)?
            .error_for_status()
            .map_err(UpstreamError::Status)?;

        let body: SearchResponse = response.json().await.map_err(UpstreamError::Decode)?;
        Ok(body.data.into_iter().map(City::from).collect())
    }
}
