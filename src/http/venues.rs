use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::upstream::{UpstreamError, VenueSearch};

/// Raw listing query. Values are forwarded without validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub page_no: Option<String>,
}

/// `GET /api/venues?lat=&lng=&pageNo=`
pub async fn list_venues(
    State(state): State<AppState>,
    Query(query): Query<VenueQuery>,
) -> Result<Json<Value>, ApiError> {
    let venues_config = &state.config.venues;
    let token = venues_config
        .credential()
        .ok_or(ApiError::NotConfigured("Venue API token is not configured"))?;

    let search = VenueSearch::from_query(
        query.page_no.as_deref(),
        query.lat.as_deref(),
        query.lng.as_deref(),
        venues_config,
    );

    let venues = state
        .upstreams
        .venues
        .list(token, &search)
        .await
        .map_err(ApiError::upstream("Failed to fetch venues"))?;

    Ok(Json(venues))
}

/// `GET /api/venues/{city}/{active_key}`
pub async fn venue_detail(
    State(state): State<AppState>,
    Path((city, active_key)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let detail = state
        .upstreams
        .venues
        .detail(&city, &active_key)
        .await
        .map_err(|e| match e {
            UpstreamError::BuildIdNotFound { .. } => {
                ApiError::upstream("Could not find build ID for venue page")(e)
            }
            other => ApiError::upstream("Failed to fetch venue details")(other),
        })?;

    Ok(Json(detail))
}
