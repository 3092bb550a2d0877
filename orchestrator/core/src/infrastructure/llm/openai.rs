// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// OpenAI Language Model Adapter
//
// Anti-Corruption Layer for the OpenAI chat completions API
// Also works with OpenAI-compatible APIs (LM Studio, vLLM, etc.)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{error_from_response, network_error, parse_error};
use crate::domain::llm::{
    Completion, CompletionRequest, FinishReason, LanguageModel, ModelError, TokenUsage,
};

pub struct OpenAIAdapter {
    client: reqwest::Client,
    provider: &'static str,
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
    #[serde(default)]
    usage: Option<OpenAIUsage>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

impl OpenAIAdapter {
    pub fn new(endpoint: String, api_key: String, model: String) -> Self {
        Self::with_provider("openai", endpoint, api_key, model)
    }

    /// Adapter for a self-hosted server speaking the OpenAI protocol
    pub fn compatible(endpoint: String, api_key: String, model: String) -> Self {
        Self::with_provider("openai-compatible", endpoint, api_key, model)
    }

    fn with_provider(
        provider: &'static str,
        endpoint: String,
        api_key: String,
        model: String,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            provider,
            endpoint,
            api_key,
            model,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), path)
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.api_key.is_empty() {
            builder
        } else {
            builder.bearer_auth(&self.api_key)
        }
    }
}

#[async_trait]
impl LanguageModel for OpenAIAdapter {
    fn provider(&self) -> &str {
        self.provider
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, ModelError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(OpenAIMessage {
                role: "system".to_string(),
                content: Some(system.clone()),
            });
        }
        messages.push(OpenAIMessage {
            role: "user".to_string(),
            content: Some(request.prompt.clone()),
        });

        let body = OpenAIRequest {
            model: &self.model,
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .authorized(self.client.post(self.url("chat/completions")))
            .json(&body)
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response, &self.model).await);
        }

        let openai_response: OpenAIResponse = response.json().await.map_err(parse_error)?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::Provider("No response from model".into()))?;

        let usage = openai_response
            .usage
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        Ok(Completion {
            text: choice.message.content.unwrap_or_default(),
            provider: self.provider.to_string(),
            model: self.model.clone(),
            usage,
            finish_reason: match choice.finish_reason.as_deref() {
                Some("length") => FinishReason::Length,
                Some("content_filter") => FinishReason::ContentFilter,
                _ => FinishReason::Stop,
            },
        })
    }

    async fn health_check(&self) -> Result<(), ModelError> {
        let response = self
            .authorized(self.client.get(self.url("models")))
            .send()
            .await
            .map_err(network_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response, &self.model).await)
        }
    }
}
