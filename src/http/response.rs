//! Error responses.
//!
//! Every failure leaves the gateway as HTTP 500 with `{"error": "..."}`,
//! except malformed request bodies, which keep axum's rejection status.
//! Upstream causes are logged here and never shown to the browser.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::upstream::UpstreamError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors a route handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A credential or identifier the route needs is unset.
    #[error("{0}")]
    NotConfigured(&'static str),

    /// The upstream call failed; `message` is what the client sees.
    #[error("{message}")]
    Upstream {
        message: &'static str,
        #[source]
        source: UpstreamError,
    },

    /// The request body was not JSON.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    /// `map_err` adapter attaching a client-facing message to an upstream error.
    pub fn upstream(message: &'static str) -> impl FnOnce(UpstreamError) -> Self {
        move |source| Self::Upstream { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(rejection) => rejection.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = match &self {
            Self::NotConfigured(message) => {
                tracing::error!(reason = %message, "Route not configured");
                message.to_string()
            }
            Self::Upstream { message, source } => {
                tracing::error!(error = %source, "{}", message);
                message.to_string()
            }
            Self::InvalidBody(rejection) => rejection.body_text(),
        };

        (self.status(), Json(ErrorBody { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_configured_is_500() {
        let response = ApiError::NotConfigured("Email service is not configured").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Email service is not configured"})
        );
    }

    #[tokio::test]
    async fn test_upstream_detail_hidden() {
        let source = UpstreamError::BuildIdNotFound {
            url: "https://internal.example/venues/x/y".into(),
        };
        let response = ApiError::upstream("Failed to fetch venue details")(source).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Failed to fetch venue details"})
        );
    }
}
