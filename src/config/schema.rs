//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind host, port).
    pub listener: ListenerConfig,

    /// City search upstream.
    pub cities: CitySearchConfig,

    /// Venue listing and venue detail upstreams.
    pub venues: VenueConfig,

    /// Transactional email upstream.
    pub email: EmailConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub bind_host: String,

    /// TCP port.
    pub port: u16,
}

impl ListenerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// City search upstream (RapidAPI GeoDB shaped).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CitySearchConfig {
    /// Value of the `X-RapidAPI-Host` header.
    pub api_host: String,

    /// Full search endpoint. Derived from `api_host` when unset.
    pub api_url: Option<String>,

    /// API key. The city route serves fallback data while this is unset.
    pub api_key: Option<String>,

    /// Maximum number of cities requested from the upstream.
    pub limit: u32,
}

impl CitySearchConfig {
    /// Search endpoint, either explicit or built from the host.
    pub fn endpoint(&self) -> String {
        match non_empty(&self.api_url) {
            Some(url) => url.to_string(),
            None => format!("https://{}/v1/geo/cities", self.api_host),
        }
    }

    /// The configured API key, treating an empty string as absent.
    pub fn credential(&self) -> Option<&str> {
        non_empty(&self.api_key)
    }
}

impl Default for CitySearchConfig {
    fn default() -> Self {
        Self {
            api_host: "wft-geo-db.p.rapidapi.com".to_string(),
            api_url: None,
            api_key: None,
            limit: 8,
        }
    }
}

/// Venue listing and venue detail upstreams.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VenueConfig {
    /// Listing endpoint that accepts the location search POST.
    pub list_url: String,

    /// Public venue site. Detail pages and `_next/data` live under it.
    pub site_url: String,

    /// Token sent as `Authorization` on listing requests.
    pub auth_token: Option<String>,

    /// Pinned build identifier. When set the detail route skips scraping.
    pub build_id: Option<String>,

    /// Latitude used when the request does not carry one.
    pub default_lat: String,

    /// Longitude used when the request does not carry one.
    pub default_lng: String,
}

impl VenueConfig {
    pub fn credential(&self) -> Option<&str> {
        non_empty(&self.auth_token)
    }

    pub fn pinned_build_id(&self) -> Option<&str> {
        non_empty(&self.build_id)
    }
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            list_url: "https://api.playo.io/activity-public/list/location".to_string(),
            site_url: "https://playo.co".to_string(),
            auth_token: None,
            build_id: None,
            default_lat: "0".to_string(),
            default_lng: "0".to_string(),
        }
    }
}

/// Transactional email upstream (EmailJS shaped).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Send endpoint.
    pub send_url: String,

    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub user_id: Option<String>,
}

/// All three identifiers needed to send an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailIdentity<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
}

impl EmailConfig {
    /// Returns the identifiers only when every one of them is set.
    pub fn identity(&self) -> Option<EmailIdentity<'_>> {
        Some(EmailIdentity {
            service_id: non_empty(&self.service_id)?,
            template_id: non_empty(&self.template_id)?,
            user_id: non_empty(&self.user_id)?,
        })
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            send_url: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: None,
            template_id: None,
            user_id: None,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Human readable or JSON lines.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.listener.port, 5000);
        assert_eq!(config.cities.limit, 8);
        assert!(config.cities.credential().is_none());
        assert!(config.venues.credential().is_none());
        assert!(config.email.identity().is_none());
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [listener]
            port = 8080

            [venues]
            auth_token = "secret"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.listener.bind_host, "0.0.0.0");
        assert_eq!(config.venues.credential(), Some("secret"));
        assert_eq!(config.venues.site_url, "https://playo.co");
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }

    #[test]
    fn test_empty_credentials_are_absent() {
        let mut cities = CitySearchConfig::default();
        cities.api_key = Some(String::new());
        assert!(cities.credential().is_none());

        let email = EmailConfig {
            service_id: Some("svc".into()),
            template_id: Some("".into()),
            user_id: Some("user".into()),
            ..EmailConfig::default()
        };
        assert!(email.identity().is_none());
    }

    #[test]
    fn test_city_endpoint_follows_host() {
        let mut cities = CitySearchConfig::default();
        assert_eq!(cities.endpoint(), "https://wft-geo-db.p.rapidapi.com/v1/geo/cities");

        cities.api_host = "geo.example.com".into();
        assert_eq!(cities.endpoint(), "https://geo.example.com/v1/geo/cities");

        cities.api_url = Some("http://127.0.0.1:9000/cities".into());
        assert_eq!(cities.endpoint(), "http://127.0.0.1:9000/cities");
    }
}
