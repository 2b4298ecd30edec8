use axum::{
    body::Bytes,
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::upstream::email::template_params;

/// `POST /api/send-email`
///
/// Configuration is checked before the body is looked at, so an
/// unconfigured gateway answers 500 whatever the client sent. An empty body
/// sends empty template params.
pub async fn send_email(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let identity = state
        .config
        .email
        .identity()
        .ok_or(ApiError::NotConfigured("Email service is not configured"))?;

    let body = if body.is_empty() {
        Value::Object(Default::default())
    } else {
        let Json(value) = Json::<Value>::from_bytes(&body)?;
        value
    };
    let params = template_params(body);

    let relayed = state
        .upstreams
        .email
        .send(identity, &params)
        .await
        .map_err(ApiError::upstream("Failed to send email"))?;

    tracing::info!(status = %relayed.status, "Email upstream responded");

    let mut response = (relayed.status, relayed.body).into_response();
    match relayed.content_type {
        Some(content_type) => {
            response.headers_mut().insert(CONTENT_TYPE, content_type);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}
