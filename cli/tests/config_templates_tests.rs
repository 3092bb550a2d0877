// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use ada_core::domain::node_config::{NodeConfigManifest, ProviderType};
use ada_stargate::commands::config::{EXAMPLES_TEMPLATE, MINIMAL_TEMPLATE};
use ada_stargate::embedded::EmbeddedExecutor;
use std::time::Duration;

#[test]
fn test_minimal_template_is_valid() {
    let config = NodeConfigManifest::from_yaml_str(MINIMAL_TEMPLATE).unwrap();
    config.validate().unwrap();

    assert!(config.spec.classifier.is_none());
    assert_eq!(config.spec.network.port, 8000);
    assert_eq!(config.spec.simulation.blocked_days, vec![15]);
}

#[test]
fn test_examples_template_is_valid() {
    let config = NodeConfigManifest::from_yaml_str(EXAMPLES_TEMPLATE).unwrap();
    config.validate().unwrap();

    let classifier = config.spec.classifier.as_ref().unwrap();
    assert!(!classifier.enabled);
    assert_eq!(classifier.provider_type, ProviderType::Gemini);
    assert_eq!(classifier.timeout, Duration::from_secs(5));
    assert_eq!(classifier.api_key.as_deref(), Some("env:API_KEY"));

    let metrics = config
        .spec
        .observability
        .as_ref()
        .and_then(|o| o.metrics.as_ref())
        .unwrap();
    assert!(!metrics.enabled);
}

#[test]
fn test_generated_file_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ada-config.yaml");
    std::fs::write(&path, EXAMPLES_TEMPLATE).unwrap();

    let config = NodeConfigManifest::from_yaml_file(&path).unwrap();
    assert_eq!(config.metadata.name, "marina-edge-01");
}

#[tokio::test]
async fn test_embedded_executor_from_template() {
    let config = NodeConfigManifest::from_yaml_str(EXAMPLES_TEMPLATE).unwrap();
    let executor = EmbeddedExecutor::new(&config);
    assert!(!executor.has_classifier());

    let response = executor
        .chat(&ada_core::domain::chat::ChatRequest::new("schedule service for 2025-11-15"))
        .await;
    assert!(response.actions.is_empty());
}
