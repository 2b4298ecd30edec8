//! Liveness and sample data routes. Neither touches an upstream.

use axum::{extract::State, Json};

use crate::data::VenueListing;
use crate::http::server::AppState;

pub const LIVENESS_BODY: &str = "Proxy server running";

/// `GET /`
pub async fn liveness() -> &'static str {
    LIVENESS_BODY
}

/// `GET /api/listings`
pub async fn mock_listings(State(state): State<AppState>) -> Json<Vec<VenueListing>> {
    Json(state.listings.to_vec())
}
