//! Environment overlay.
//!
//! Applied after the file is parsed. Empty variables are ignored so that
//! `FOO=` behaves like an unset `FOO`.

use crate::config::schema::GatewayConfig;

pub const PORT: &str = "PORT";
pub const CITY_API_HOST: &str = "CITY_API_HOST";
pub const CITY_API_KEY: &str = "CITY_API_KEY";
pub const VENUE_API_TOKEN: &str = "VENUE_API_TOKEN";
pub const EMAIL_SERVICE_ID: &str = "EMAIL_SERVICE_ID";
pub const EMAIL_TEMPLATE_ID: &str = "EMAIL_TEMPLATE_ID";
pub const EMAIL_USER_ID: &str = "EMAIL_USER_ID";
pub const DEFAULT_LAT: &str = "DEFAULT_LAT";
pub const DEFAULT_LNG: &str = "DEFAULT_LNG";

/// Overlay values from the process environment.
pub fn apply_env(config: &mut GatewayConfig) {
    apply_overrides(config, |key| std::env::var(key).ok());
}

/// Overlay values from an arbitrary lookup.
///
/// An unparseable `PORT` is logged and ignored.
pub fn apply_overrides<F>(config: &mut GatewayConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(port) = get(PORT) {
        match port.parse() {
            Ok(port) => config.listener.port = port,
            Err(e) => tracing::warn!(value = %port, error = %e, "Ignoring invalid PORT"),
        }
    }

    if let Some(host) = get(CITY_API_HOST) {
        config.cities.api_host = host;
    }
    if let Some(key) = get(CITY_API_KEY) {
        config.cities.api_key = Some(key);
    }
    if let Some(token) = get(VENUE_API_TOKEN) {
        config.venues.auth_token = Some(token);
    }
    if let Some(lat) = get(DEFAULT_LAT) {
        config.venues.default_lat = lat;
    }
    if let Some(lng) = get(DEFAULT_LNG) {
        config.venues.default_lng = lng;
    }
    if let Some(id) = get(EMAIL_SERVICE_ID) {
        config.email.service_id = Some(id);
    }
    if let Some(id) = get(EMAIL_TEMPLATE_ID) {
        config.email.template_id = Some(id);
    }
    if let Some(id) = get(EMAIL_USER_ID) {
        config.email.user_id = Some(id);
    }
}
