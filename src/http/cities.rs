use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::data::{filter_fallback, City};
use crate::http::response::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CityQuery {
    #[serde(default)]
    pub q: String,
}

/// `GET /api/cities?q=`
///
/// Without a city-search key the built-in list is filtered instead.
pub async fn search_cities(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<Vec<City>>, ApiError> {
    let Some(api_key) = state.config.cities.credential() else {
        tracing::debug!(q = %query.q, "City search not configured, serving fallback cities");
        return Ok(Json(filter_fallback(&query.q)));
    };

    let cities = state
        .upstreams
        .cities
        .search(api_key, &query.q)
        .await
        .map_err(ApiError::upstream("Failed to fetch cities"))?;

    Ok(Json(cities))
}
