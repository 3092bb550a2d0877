// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Model-backed intent classifier.
//!
//! Renders the classification prompt, runs one completion and interprets the
//! output with [`Classification::from_model_output`]. Timeouts are the
//! router's concern.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::intent::{Classification, ClassifierError, IntentClassifier};
use crate::domain::llm::{CompletionRequest, LanguageModel};
use crate::domain::node_config::ClassifierConfig;
use crate::infrastructure::prompt::{ClassificationContext, PromptTemplateEngine};

pub struct ModelIntentClassifier {
    model: Arc<dyn LanguageModel>,
    engine: PromptTemplateEngine,
    template: Option<String>,
    temperature: f32,
    max_tokens: u32,
}

impl ModelIntentClassifier {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            model,
            engine: PromptTemplateEngine::new(),
            template: None,
            temperature: 0.0,
            max_tokens: 64,
        }
    }

    pub fn from_config(model: Arc<dyn LanguageModel>, config: &ClassifierConfig) -> Self {
        Self {
            template: config.prompt_template.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            ..Self::new(model)
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    fn build_request(&self, prompt: &str) -> Result<CompletionRequest, ClassifierError> {
        let rendered = self
            .engine
            .render_with_fallback(self.template.as_deref(), &ClassificationContext::new(prompt))
            .map_err(|e| ClassifierError::Prompt(format!("{:#}", e)))?;

        Ok(CompletionRequest::new(rendered)
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature))
    }
}

#[async_trait]
impl IntentClassifier for ModelIntentClassifier {
    fn provider(&self) -> &str {
        self.model.provider()
    }

    async fn classify(&self, prompt: &str) -> Result<Classification, ClassifierError> {
        let request = self.build_request(prompt)?;
        let completion = self.model.complete(&request).await?;

        tracing::debug!(
            provider = %completion.provider,
            model = %completion.model,
            tokens = completion.usage.total_tokens,
            "Classifier completion received"
        );

        Classification::from_model_output(&completion.text)
    }
}
