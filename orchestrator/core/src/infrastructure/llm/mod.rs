// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Language Model Infrastructure - Anti-Corruption Layer Implementations
//
// Each adapter translates between the domain `LanguageModel` interface and a
// vendor completion API. `factory` turns classifier configuration into a
// ready-to-use adapter.

pub mod anthropic;
pub mod factory;
pub mod gemini;
pub mod ollama;
pub mod openai;

pub use anthropic::AnthropicAdapter;
pub use factory::{build_classifier, build_model, resolve_api_key};
pub use gemini::GeminiAdapter;
pub use ollama::OllamaAdapter;
pub use openai::OpenAIAdapter;

use crate::domain::llm::ModelError;

/// Converts a non-success response into the matching `ModelError`.
pub(crate) async fn error_from_response(response: reqwest::Response, model: &str) -> ModelError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ModelError::from_status(status, body, model)
}

pub(crate) fn network_error(error: reqwest::Error) -> ModelError {
    ModelError::Network(error.to_string())
}

pub(crate) fn parse_error(error: reqwest::Error) -> ModelError {
    ModelError::Provider(format!("Failed to parse response: {}", error))
}
