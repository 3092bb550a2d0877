// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use ada_sdk::{AdaClient, ChatRequest, RequesterRole, ResponseMode};
use mockito::Matcher;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_chat_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/chat")
        .match_body(Matcher::PartialJson(json!({
            "prompt": "invoice for 500 please",
            "user_role": "CAPTAIN"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "text": "**FINANCE (SIMULATION):** ...",
                "actions": [{
                    "node": "ada.finance",
                    "action": "create_invoice",
                    "params": { "total": 590.0, "currency": "EUR" }
                }],
                "mode": "SIMULATION"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = AdaClient::new(format!("{}/", server.url()));
    let request = ChatRequest::new("invoice for 500 please").with_role(RequesterRole::Captain);
    let response = client.chat(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.mode, ResponseMode::Simulation);
    let action = response.first_action().unwrap();
    assert_eq!(action.target_node(), "ada.finance");
    assert_eq!(action.parameter("total"), Some(&json!(590.0)));
}

#[tokio::test]
async fn test_health() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(
            json!({
                "status": "online",
                "simulation_mode": true,
                "classifier_enabled": false,
                "version": "0.4.1",
                "uptime_seconds": 12,
                "message": "Don't panic! No real API keys needed."
            })
            .to_string(),
        )
        .create_async()
        .await;

    let health = AdaClient::new(server.url()).health().await.unwrap();
    assert_eq!(health.status, "online");
    assert!(health.simulation_mode);
    assert_eq!(health.uptime_seconds, 12);
}

#[tokio::test]
async fn test_error_status_carries_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/v1/chat")
        .with_status(422)
        .with_body("missing field `prompt`")
        .create_async()
        .await;

    let err = AdaClient::new(server.url())
        .chat(&ChatRequest::new("x"))
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("422"));
    assert!(message.contains("missing field `prompt`"));
}

#[tokio::test]
async fn test_unreachable_node() {
    let client = AdaClient::new("http://127.0.0.1:1").with_timeout(Duration::from_millis(500));
    assert!(client.health().await.is_err());
}
