// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Read-only status reported by the health endpoint.

use serde::{Deserialize, Serialize};

/// Process-wide facts fixed at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub classifier_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier_provider: Option<String>,
}

impl ServiceStatus {
    pub fn heuristic_only() -> Self {
        Self {
            classifier_enabled: false,
            classifier_provider: None,
        }
    }

    pub fn with_classifier(provider: impl Into<String>) -> Self {
        Self {
            classifier_enabled: true,
            classifier_provider: Some(provider.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// True when no classifier is configured and routing is keyword-only
    pub simulation_mode: bool,
    pub classifier_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier_provider: Option<String>,
    pub version: String,
    #[serde(default)]
    pub uptime_seconds: u64,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn online(status: &ServiceStatus, uptime_seconds: u64) -> Self {
        let message = if status.classifier_enabled {
            "Intent classifier online; keyword routing on standby.".to_string()
        } else {
            "Don't panic! No real API keys needed.".to_string()
        };

        Self {
            status: "online".to_string(),
            simulation_mode: !status.classifier_enabled,
            classifier_enabled: status.classifier_enabled,
            classifier_provider: status.classifier_provider.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds,
            message,
        }
    }
}
