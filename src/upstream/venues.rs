//! Venue listing and venue detail upstreams.
//!
//! Listing is a single authenticated POST. Detail needs the site's build
//! identifier to address its `_next/data` JSON, so it is either pinned in
//! config or scraped from the venue's HTML page first.

use serde::Serialize;
use serde_json::value::RawValue;
use serde_json::Value;
use url::Url;

use crate::config::VenueConfig;
use crate::upstream::client::timed;
use crate::upstream::scrape::extract_build_id;
use crate::upstream::{UpstreamError, UpstreamResult};

const LIST_SERVICE: &str = "venues";
const DETAIL_SERVICE: &str = "venue_detail";

/// A query value as it goes into the upstream JSON body.
///
/// Numeric text is written as a JSON number with its digits exactly as
/// received (`12.970` stays `12.970`). Anything else becomes a string.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Number(Box<RawValue>),
    Text(String),
}

impl QueryValue {
    pub fn from_raw(raw: &str) -> Self {
        let numeric =
            raw.trim() == raw && serde_json::from_str::<serde_json::Number>(raw).is_ok();
        if numeric {
            if let Ok(number) = RawValue::from_string(raw.to_string()) {
                return Self::Number(number);
            }
        }
        Self::Text(raw.to_string())
    }
}

impl PartialEq for QueryValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.get() == b.get(),
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

/// Body of the location search POST.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueSearch {
    pub page: QueryValue,
    pub lat: QueryValue,
    pub lng: QueryValue,
    #[serde(rename = "sportId")]
    pub sport_id: Vec<String>,
    pub category: &'static str,
}

impl VenueSearch {
    /// Build a search from raw query values, substituting defaults for absent
    /// or empty ones.
    pub fn from_query<'a>(
        page: Option<&'a str>,
        lat: Option<&'a str>,
        lng: Option<&'a str>,
        config: &'a VenueConfig,
    ) -> Self {
        let given = |v: Option<&'a str>| v.filter(|v| !v.is_empty());
        Self {
            page: QueryValue::from_raw(given(page).unwrap_or("0")),
            lat: QueryValue::from_raw(given(lat).unwrap_or(&config.default_lat)),
            lng: QueryValue::from_raw(given(lng).unwrap_or(&config.default_lng)),
            sport_id: Vec::new(),
            category: "venue",
        }
    }
}

#[derive(Clone)]
pub struct VenueClient {
    http: reqwest::Client,
    config: VenueConfig,
}

impl VenueClient {
    pub fn new(http: reqwest::Client, config: VenueConfig) -> Self {
        Self { http, config }
    }

    /// POST a location search and return the upstream JSON untouched.
    pub async fn list(&self, token: &str, search: &VenueSearch) -> UpstreamResult<Value> {
        timed(LIST_SERVICE, self.fetch_list(token, search)).await
    }

    /// Fetch the data document behind `/venues/{city}/{active_key}`.
    pub async fn detail(&self, city: &str, active_key: &str) -> UpstreamResult<Value> {
        timed(DETAIL_SERVICE, self.fetch_detail(city, active_key)).await
    }

    async fn fetch_list(&self, token: &str, search: &VenueSearch) -> UpstreamResult<Value> {
        tracing::debug!(url = %self.config.list_url, page = ?search.page, "Listing venues upstream");

        let response = self
            .http
            .post(&self.config.list_url)
            .header(reqwest::header::AUTHORIZATION, token)
            .json(search)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        response.json().await.map_err(UpstreamError::Decode)
    }

    async fn fetch_detail(&self, city: &str, active_key: &str) -> UpstreamResult<Value> {
        let build_id = self.resolve_build_id(city, active_key).await?;
        let url = self.data_url(&build_id, city, active_key)?;

        tracing::debug!(url = %url, build_id = %build_id, "Fetching venue detail");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        response.json().await.map_err(UpstreamError::Decode)
    }

    /// Pinned build identifier, or the one scraped from the venue page.
    pub async fn resolve_build_id(&self, city: &str, active_key: &str) -> UpstreamResult<String> {
        if let Some(pinned) = self.config.pinned_build_id() {
            return Ok(pinned.to_string());
        }

        let url = self.page_url(city, active_key)?;
        let html = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(UpstreamError::Transport)?
            .text()
            .await
            .map_err(UpstreamError::Decode)?;

        match extract_build_id(&html) {
            Some(id) => Ok(id.to_string()),
            None => {
                tracing::warn!(url = %url, "Venue page carried no build identifier");
                Err(UpstreamError::BuildIdNotFound { url: url.to_string() })
            }
        }
    }

    /// `{site}/venues/{city}/{active_key}`
    pub fn page_url(&self, city: &str, active_key: &str) -> UpstreamResult<Url> {
        self.site_url(&["venues", city, active_key])
    }

    /// `{site}/_next/data/{build_id}/venues/{city}/{active_key}.json`
    pub fn data_url(&self, build_id: &str, city: &str, active_key: &str) -> UpstreamResult<Url> {
        let file = format!("{active_key}.json");
        self.site_url(&["_next", "data", build_id, "venues", city, &file])
    }

    fn site_url(&self, segments: &[&str]) -> UpstreamResult<Url> {
        let mut url = Url::parse(&self.config.site_url)?;
        url.path_segments_mut()
            .map_err(|_| UpstreamError::NotABase(self.config.site_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
