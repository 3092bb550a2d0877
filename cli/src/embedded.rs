// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Embedded mode execution (when daemon is not running)
//!
//! Builds the router in-process from the same configuration the daemon uses.

use std::sync::Arc;

use ada_core::application::handlers::DomainHandlers;
use ada_core::application::router::{IntentRouter, DEFAULT_CLASSIFIER_TIMEOUT};
use ada_core::domain::chat::{ChatRequest, ChatResponse};
use ada_core::domain::node_config::NodeConfigManifest;
use ada_core::domain::workers::RandomReferences;
use ada_core::infrastructure::llm::build_classifier;

/// Router wired from configuration. Classifier problems degrade to keyword routing.
pub fn build_router(config: &NodeConfigManifest) -> IntentRouter {
    let handlers = DomainHandlers::from_config(&config.spec.simulation, Arc::new(RandomReferences));
    let classifier = build_classifier(config);
    let timeout = config
        .active_classifier()
        .map(|c| c.timeout)
        .unwrap_or(DEFAULT_CLASSIFIER_TIMEOUT);

    IntentRouter::new(handlers, classifier, timeout)
}

pub struct EmbeddedExecutor {
    router: IntentRouter,
}

impl EmbeddedExecutor {
    pub fn new(config: &NodeConfigManifest) -> Self {
        Self {
            router: build_router(config),
        }
    }

    pub fn has_classifier(&self) -> bool {
        self.router.has_classifier()
    }

    pub async fn chat(&self, request: &ChatRequest) -> ChatResponse {
        self.router.route(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ada_core::domain::chat::ResponseMode;

    #[tokio::test]
    async fn test_embedded_heuristic_routing() {
        let executor = EmbeddedExecutor::new(&NodeConfigManifest::default());
        assert!(!executor.has_classifier());

        let response = executor.chat(&ChatRequest::new("invoice for 500 please")).await;
        assert_eq!(response.mode, ResponseMode::Simulation);
        assert_eq!(response.actions[0].action_name(), "create_invoice");
    }
}
