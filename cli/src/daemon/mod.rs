// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Daemon mode implementation
//!
//! Handles:
//! - HTTP server lifecycle
//! - Health-check based detection of a running daemon

use std::time::Duration;

use ada_sdk::AdaClient;

use crate::commands::Endpoint;

pub mod server;

pub use server::start_daemon;

const DETECTION_TIMEOUT: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub enum DaemonStatus {
    Running {
        uptime: u64,
        classifier_provider: Option<String>,
    },
    Stopped,
    Unhealthy {
        error: String,
    },
}

/// Check if a daemon answers on `endpoint` via its health probe
pub async fn check_daemon_running(endpoint: &Endpoint) -> DaemonStatus {
    let client = AdaClient::new(endpoint.base_url()).with_timeout(DETECTION_TIMEOUT);

    match client.health().await {
        Ok(health) if health.status == "online" => DaemonStatus::Running {
            uptime: health.uptime_seconds,
            classifier_provider: health.classifier_provider,
        },
        Ok(health) => DaemonStatus::Unhealthy {
            error: format!("status '{}'", health.status),
        },
        Err(e) => {
            // Connection refused/timeout means nothing is listening
            let is_unreachable = e
                .chain()
                .filter_map(|cause| cause.downcast_ref::<reqwest::Error>())
                .any(|cause| cause.is_connect() || cause.is_timeout());
            if is_unreachable {
                DaemonStatus::Stopped
            } else {
                DaemonStatus::Unhealthy {
                    error: format!("{:#}", e),
                }
            }
        }
    }
}
