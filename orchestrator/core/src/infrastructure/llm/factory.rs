// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Classifier Factory
//
// Turns the `spec.classifier` section of the node configuration into a ready
// adapter. A missing or broken classifier never stops the node: the problem
// is logged and routing stays heuristic.

use std::sync::Arc;
use tracing::{info, warn};

use super::{AnthropicAdapter, GeminiAdapter, OllamaAdapter, OpenAIAdapter};
use crate::domain::intent::IntentClassifier;
use crate::domain::llm::LanguageModel;
use crate::domain::node_config::{ClassifierConfig, NodeConfigManifest, ProviderType};
use crate::infrastructure::classifier::ModelIntentClassifier;

/// Create a model adapter from classifier configuration
pub fn build_model(config: &ClassifierConfig) -> anyhow::Result<Arc<dyn LanguageModel>> {
    let api_key = resolve_api_key(&config.api_key)?;
    if api_key.is_empty() && config.provider_type.requires_api_key() {
        anyhow::bail!(
            "Provider '{}' requires an api_key",
            config.provider_type.as_str()
        );
    }

    let endpoint = config.endpoint().to_string();
    let model = config.model.clone();

    let adapter: Arc<dyn LanguageModel> = match config.provider_type {
        ProviderType::Gemini => Arc::new(GeminiAdapter::new(endpoint, api_key, model)),
        ProviderType::OpenAI => Arc::new(OpenAIAdapter::new(endpoint, api_key, model)),
        ProviderType::OpenAICompatible => {
            Arc::new(OpenAIAdapter::compatible(endpoint, api_key, model))
        }
        ProviderType::Anthropic => Arc::new(AnthropicAdapter::new(endpoint, api_key, model)),
        ProviderType::Ollama => Arc::new(OllamaAdapter::new(endpoint, model)),
    };

    Ok(adapter)
}

/// Classifier for the node, or `None` when routing should stay heuristic.
pub fn build_classifier(config: &NodeConfigManifest) -> Option<Arc<dyn IntentClassifier>> {
    let Some(classifier_config) = config.spec.classifier.as_ref() else {
        info!("No classifier configured, using keyword routing");
        return None;
    };

    if !classifier_config.is_active() {
        info!("Classifier disabled, using keyword routing");
        return None;
    }

    match build_model(classifier_config) {
        Ok(model) => {
            info!(
                provider = classifier_config.provider_type.as_str(),
                model = %classifier_config.model,
                "Intent classifier initialized"
            );
            Some(Arc::new(ModelIntentClassifier::from_config(
                model,
                classifier_config,
            )))
        }
        Err(e) => {
            warn!("Failed to initialize classifier, using keyword routing: {}", e);
            None
        }
    }
}

/// Resolve API key from config (supports "env:VAR_NAME" syntax)
pub fn resolve_api_key(key: &Option<String>) -> anyhow::Result<String> {
    match key.as_deref() {
        Some(k) => match k.strip_prefix("env:") {
            Some(var_name) => std::env::var(var_name)
                .map_err(|_| anyhow::anyhow!("Environment variable not set: {}", var_name)),
            None => Ok(k.to_string()),
        },
        None => Ok(String::new()),
    }
}
