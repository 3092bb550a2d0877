// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Llm
//!
//! Provider-neutral interface to the language models backing the intent
//! classifier.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Anti-corruption layer over vendor completion APIs
//!
//! Adapters live in `infrastructure/llm/`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Domain interface for completion providers
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Provider type name (e.g. "gemini", "openai")
    fn provider(&self) -> &str;

    /// Run a single completion
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ModelError>;

    /// Check if provider is reachable and the credentials are accepted
    async fn health_check(&self) -> Result<(), ModelError>;
}

/// One completion call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// System instruction, for providers that support one
    pub system: Option<String>,

    /// User turn
    pub prompt: String,

    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,

    /// Sampling temperature (0.0 = deterministic)
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Completion {
    /// Generated text
    pub text: String,

    /// Provider type name
    pub provider: String,

    /// Model used (e.g. "gemini-2.5-flash")
    pub model: String,

    pub usage: TokenUsage,

    pub finish_reason: FinishReason,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
}

/// Errors that can occur during model calls
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ModelError {
    /// Maps a non-success HTTP status to the matching error variant.
    pub fn from_status(status: u16, body: String, model: &str) -> Self {
        match status {
            401 | 403 => Self::Authentication(body),
            429 => Self::RateLimit,
            404 => Self::ModelNotFound(model.to_string()),
            400 => Self::InvalidInput(body),
            _ => Self::Provider(format!("HTTP {}: {}", status, body)),
        }
    }

    /// Short label used for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Authentication(_) => "authentication",
            Self::RateLimit => "rate_limit",
            Self::ModelNotFound(_) => "model_not_found",
            Self::Provider(_) => "provider",
            Self::InvalidInput(_) => "invalid_input",
        }
    }
}
