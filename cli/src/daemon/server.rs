// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Daemon HTTP server implementation

use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

use ada_core::domain::node_config::NodeConfigManifest;
use ada_core::presentation::api::{app, AppState};

use crate::commands::Endpoint;
use crate::embedded::build_router;

pub async fn start_daemon(config: NodeConfigManifest, endpoint: Endpoint) -> Result<()> {
    config
        .validate()
        .context("Configuration validation failed")?;

    info!(
        "Configuration loaded: node={} id={}",
        config.metadata.name, config.spec.node.id
    );

    install_metrics_exporter(&config)?;

    let router = Arc::new(build_router(&config));
    let state = AppState::new(router).with_simulated_latency(config.spec.network.simulated_latency);

    if state.status.classifier_enabled {
        info!(
            "Intent classifier: {}",
            state.status.classifier_provider.as_deref().unwrap_or("unknown")
        );
    } else {
        info!("Running in simulation mode (keyword routing only)");
    }

    let app = app(state, &config.spec.network.cors_origins);

    let addr = endpoint.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Daemon listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Daemon shutting down");

    Ok(())
}

fn install_metrics_exporter(config: &NodeConfigManifest) -> Result<()> {
    let Some(metrics) = config
        .spec
        .observability
        .as_ref()
        .and_then(|o| o.metrics.as_ref())
        .filter(|m| m.enabled)
    else {
        return Ok(());
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], metrics.port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .with_context(|| format!("Failed to start Prometheus exporter on {}", addr))?;

    info!("Prometheus metrics exposed on {}", addr);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
