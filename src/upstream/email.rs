//! Transactional email upstream.

use axum::body::Bytes;
use axum::http::{HeaderValue, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::config::{EmailConfig, EmailIdentity};
use crate::upstream::client::timed;
use crate::upstream::{UpstreamError, UpstreamResult};

const SERVICE: &str = "email";

#[derive(Debug, Serialize)]
struct SendPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a Value,
}

/// Upstream status and body, relayed to the caller as-is.
#[derive(Debug, Clone)]
pub struct RelayedResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

/// Accepts `{"template_params": {...}}` or a bare params object. A null
/// `template_params` counts as absent.
pub fn template_params(body: Value) -> Value {
    match body.get("template_params") {
        Some(params) if !params.is_null() => params.clone(),
        _ => body,
    }
}

#[derive(Clone)]
pub struct EmailClient {
    http: reqwest::Client,
    config: EmailConfig,
}

impl EmailClient {
    pub fn new(http: reqwest::Client, config: EmailConfig) -> Self {
        Self { http, config }
    }

    pub async fn send(
        &self,
        identity: EmailIdentity<'_>,
        params: &Value,
    ) -> UpstreamResult<RelayedResponse> {
        timed(SERVICE, self.post(identity, params)).await
    }

    async fn post(&self, identity: EmailIdentity<'_>, params: &Value) -> UpstreamResult<RelayedResponse> {
        let payload = SendPayload {
            service_id: identity.service_id,
            template_id: identity.template_id,
            user_id: identity.user_id,
            template_params: params,
        };

        tracing::debug!(url = %self.config.send_url, template_id = %identity.template_id, "Sending email upstream");

        let response = self
            .http
            .post(&self.config.send_url)
            .json(&payload)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .cloned();
        let body = response.bytes().await.map_err(UpstreamError::Decode)?;

        Ok(RelayedResponse {
            status,
            content_type,
            body,
        })
    }
}
