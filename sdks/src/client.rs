// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{ChatRequest, ChatResponse, HealthStatus};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for interacting with an Ada Stargate node.
#[derive(Debug, Clone)]
pub struct AdaClient {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl AdaClient {
    /// Create a new client for `base_url` (e.g. `http://127.0.0.1:8000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a chat request and wait for the routed response.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}/api/v1/chat", self.base_url);
        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        Self::decode(response).await
    }

    /// Query the node's health endpoint.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Request failed with HTTP {}: {}", status, body);
        }

        response
            .json()
            .await
            .context("Failed to decode response body")
    }
}
