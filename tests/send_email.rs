//! Integration tests for the email relay route.

use httpmock::prelude::*;
use serde_json::{json, Value};

mod common;
use common::{client, closed_address, config_for, TestGateway};

const SEND_PATH: &str = "/api/v1.0/email/send";

fn configured(upstream: &MockServer) -> venue_gateway::GatewayConfig {
    let mut config = config_for(upstream);
    config.email.service_id = Some("service_abc".into());
    config.email.template_id = Some("template_xyz".into());
    config.email.user_id = Some("user_123".into());
    config
}

#[tokio::test]
async fn test_any_missing_identifier_is_500_without_network() {
    let upstream = MockServer::start_async().await;
    let send = upstream
        .mock_async(|when, then| {
            when.path(SEND_PATH);
            then.status(200).body("OK");
        })
        .await;

    let mut missing_service = configured(&upstream);
    missing_service.email.service_id = None;
    let mut missing_template = configured(&upstream);
    missing_template.email.template_id = Some(String::new());
    let mut missing_user = configured(&upstream);
    missing_user.email.user_id = None;

    for config in [missing_service, missing_template, missing_user] {
        let gateway = TestGateway::start(config).await;
        let res = client()
            .post(gateway.url("/api/send-email"))
            .json(&json!({"template_params": {"to_name": "Asha"}}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 500);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!({"error": "Email service is not configured"}));
    }

    send.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_wrapped_params_relayed() {
    let upstream = MockServer::start_async().await;
    let send = upstream
        .mock_async(|when, then| {
            when.method(POST).path(SEND_PATH).json_body(json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "user_123",
                "template_params": {"to_name": "Asha", "message": "Booked court 3"}
            }));
            then.status(200).header("content-type", "text/plain").body("OK");
        })
        .await;

    let gateway = TestGateway::start(configured(&upstream)).await;

    let res = client()
        .post(gateway.url("/api/send-email"))
        .json(&json!({"template_params": {"to_name": "Asha", "message": "Booked court 3"}}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "text/plain");
    assert_eq!(res.text().await.unwrap(), "OK");

    send.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_bare_params_and_upstream_status_relayed() {
    let upstream = MockServer::start_async().await;
    let send = upstream
        .mock_async(|when, then| {
            when.method(POST).path(SEND_PATH).json_body(json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "user_123",
                "template_params": {"reply_to": "asha@example.com"}
            }));
            then.status(400).body("The template ID is invalid");
        })
        .await;

    let gateway = TestGateway::start(configured(&upstream)).await;

    let res = client()
        .post(gateway.url("/api/send-email"))
        .json(&json!({"reply_to": "asha@example.com"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    assert_eq!(res.text().await.unwrap(), "The template ID is invalid");

    send.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_null_template_params_send_whole_body() {
    let upstream = MockServer::start_async().await;
    let send = upstream
        .mock_async(|when, then| {
            when.method(POST).path(SEND_PATH).json_body(json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "user_123",
                "template_params": {"template_params": null, "to_name": "Asha"}
            }));
            then.status(200).body("OK");
        })
        .await;

    let gateway = TestGateway::start(configured(&upstream)).await;

    let res = client()
        .post(gateway.url("/api/send-email"))
        .json(&json!({"template_params": null, "to_name": "Asha"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    send.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_unreachable_upstream_is_500() {
    let upstream = MockServer::start_async().await;
    let mut config = configured(&upstream);
    config.email.send_url = format!("http://{}/api/v1.0/email/send", closed_address().await);
    let gateway = TestGateway::start(config).await;

    let res = client()
        .post(gateway.url("/api/send-email"))
        .json(&json!({"to_name": "Asha"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Failed to send email"}));
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let upstream = MockServer::start_async().await;
    let send = upstream
        .mock_async(|when, then| {
            when.path(SEND_PATH);
            then.status(200).body("OK");
        })
        .await;

    let gateway = TestGateway::start(configured(&upstream)).await;

    let res = client()
        .post(gateway.url("/api/send-email"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert!(res.status().is_client_error());
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].is_string());

    send.assert_hits_async(0).await;
}
