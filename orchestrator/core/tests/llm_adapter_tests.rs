// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use ada_core::domain::handler::Domain;
use ada_core::domain::intent::{Classification, IntentClassifier};
use ada_core::domain::llm::{CompletionRequest, FinishReason, LanguageModel, ModelError};
use ada_core::infrastructure::classifier::ModelIntentClassifier;
use ada_core::infrastructure::llm::{AnthropicAdapter, GeminiAdapter, OllamaAdapter, OpenAIAdapter};
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;

fn request() -> CompletionRequest {
    CompletionRequest::new("invoice for 500 please")
        .with_system("Reply with one label")
        .with_max_tokens(16)
        .with_temperature(0.0)
}

#[tokio::test]
async fn test_gemini_generate_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "invoice for 500 please" }] }],
            "systemInstruction": { "parts": [{ "text": "Reply with one label" }] },
            "generationConfig": { "maxOutputTokens": 16 }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "FINANCE" }], "role": "model" },
                    "finishReason": "STOP"
                }],
                "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 1, "totalTokenCount": 13 }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let adapter = GeminiAdapter::new(server.url(), "test-key".into(), "gemini-2.5-flash".into());
    let completion = adapter.complete(&request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(completion.text, "FINANCE");
    assert_eq!(completion.provider, "gemini");
    assert_eq!(completion.usage.total_tokens, 13);
    assert_eq!(completion.finish_reason, FinishReason::Stop);
}

#[tokio::test]
async fn test_gemini_without_candidates_is_provider_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .with_status(200)
        .with_body(json!({ "candidates": [] }).to_string())
        .create_async()
        .await;

    let adapter = GeminiAdapter::new(server.url(), "k".into(), "gemini-2.5-flash".into());
    let err = adapter.complete(&request()).await.unwrap_err();
    assert!(matches!(err, ModelError::Provider(_)));
}

#[tokio::test]
async fn test_openai_chat_completions() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o-mini",
            "messages": [
                { "role": "system", "content": "Reply with one label" },
                { "role": "user", "content": "invoice for 500 please" }
            ],
            "max_tokens": 16
        })))
        .with_status(200)
        .with_body(
            json!({
                "choices": [{ "message": { "role": "assistant", "content": "FINANCE" }, "finish_reason": "length" }],
                "usage": { "prompt_tokens": 20, "completion_tokens": 1, "total_tokens": 21 }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let adapter = OpenAIAdapter::new(server.url(), "sk-test".into(), "gpt-4o-mini".into());
    let completion = adapter.complete(&request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(completion.text, "FINANCE");
    assert_eq!(completion.usage.prompt_tokens, 20);
    assert_eq!(completion.finish_reason, FinishReason::Length);
}

#[tokio::test]
async fn test_openai_compatible_without_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(json!({ "choices": [{ "message": { "role": "assistant", "content": "LEGAL" } }] }).to_string())
        .create_async()
        .await;

    let adapter = OpenAIAdapter::compatible(server.url(), String::new(), "local".into());
    let completion = adapter.complete(&request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(adapter.provider(), "openai-compatible");
    assert_eq!(completion.text, "LEGAL");
}

#[tokio::test]
async fn test_anthropic_messages() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/messages")
        .match_header("x-api-key", "ant-key")
        .match_header("anthropic-version", "2023-06-01")
        .match_body(Matcher::PartialJson(json!({
            "system": "Reply with one label",
            "max_tokens": 16
        })))
        .with_status(200)
        .with_body(
            json!({
                "content": [{ "type": "text", "text": "TECHNIC" }],
                "usage": { "input_tokens": 9, "output_tokens": 2 },
                "stop_reason": "end_turn"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let adapter = AnthropicAdapter::new(server.url(), "ant-key".into(), "claude-haiku".into());
    let completion = adapter.complete(&request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(completion.text, "TECHNIC");
    assert_eq!(completion.usage.total_tokens, 11);
}

#[tokio::test]
async fn test_ollama_generate() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::PartialJson(json!({
            "model": "llama3.2",
            "stream": false,
            "options": { "num_predict": 16 }
        })))
        .with_status(200)
        .with_body(
            json!({ "response": "LEGAL", "done": true, "done_reason": "stop", "eval_count": 1, "prompt_eval_count": 30 })
                .to_string(),
        )
        .create_async()
        .await;

    let adapter = OllamaAdapter::new(server.url(), "llama3.2".into());
    let completion = adapter.complete(&request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(completion.text, "LEGAL");
    assert_eq!(completion.usage.total_tokens, 31);
}

#[tokio::test]
async fn test_status_codes_map_to_errors() {
    let cases = [
        (401, "authentication"),
        (403, "authentication"),
        (429, "rate_limit"),
        (404, "model_not_found"),
        (400, "invalid_input"),
        (503, "provider"),
    ];

    for (status, kind) in cases {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(status)
            .with_body("nope")
            .create_async()
            .await;

        let adapter = OpenAIAdapter::new(server.url(), "k".into(), "gpt-4o-mini".into());
        let err = adapter.complete(&request()).await.unwrap_err();
        assert_eq!(err.kind(), kind, "status {status}");
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let adapter = OllamaAdapter::new("http://127.0.0.1:1".into(), "llama3.2".into());
    let err = adapter.complete(&request()).await.unwrap_err();
    assert!(matches!(err, ModelError::Network(_)));
}

#[tokio::test]
async fn test_health_checks() {
    let mut server = mockito::Server::new_async().await;
    server.mock("GET", "/api/tags").with_status(200).with_body("{}").create_async().await;
    server.mock("GET", "/models").with_status(401).create_async().await;

    let ollama = OllamaAdapter::new(server.url(), "llama3.2".into());
    assert!(ollama.health_check().await.is_ok());

    let openai = OpenAIAdapter::new(server.url(), "bad".into(), "gpt-4o-mini".into());
    assert!(matches!(
        openai.health_check().await,
        Err(ModelError::Authentication(_))
    ));
}

#[tokio::test]
async fn test_classifier_over_gemini() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .match_body(Matcher::Regex("schedule the haul-out".to_string()))
        .with_status(200)
        .with_body(
            json!({ "candidates": [{ "content": { "parts": [{ "text": "**TECHNIC**\n" }] } }] })
                .to_string(),
        )
        .create_async()
        .await;

    let model = Arc::new(GeminiAdapter::new(
        server.url(),
        "k".into(),
        "gemini-2.5-flash".into(),
    ));
    let classifier = ModelIntentClassifier::new(model);

    let classification = classifier.classify("schedule the haul-out").await.unwrap();
    assert_eq!(classification, Classification::Domain(Domain::Technical));
    assert_eq!(classifier.provider(), "gemini");
}
