// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! HTTP surface: health probe and chat endpoint.

use axum::{
    extract::State,
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::router::IntentRouter;
use crate::domain::chat::{ChatRequest, ChatResponse};
use crate::domain::health::{HealthStatus, ServiceStatus};

#[derive(Clone)]
pub struct AppState {
    pub router: Arc<IntentRouter>,
    pub status: ServiceStatus,
    pub started_at: Instant,
    /// Delay applied before every chat request is routed
    pub simulated_latency: Duration,
}

impl AppState {
    pub fn new(router: Arc<IntentRouter>) -> Self {
        let status = match router.classifier_provider() {
            Some(provider) => ServiceStatus::with_classifier(provider),
            None => ServiceStatus::heuristic_only(),
        };

        Self {
            router,
            status,
            started_at: Instant::now(),
            simulated_latency: Duration::ZERO,
        }
    }

    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }
}

pub fn app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/v1/chat", post(chat))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// CORS restricted to `origins`; `*` allows any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(HealthStatus::online(
        &state.status,
        state.started_at.elapsed().as_secs(),
    ))
}

async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    if !state.simulated_latency.is_zero() {
        tokio::time::sleep(state.simulated_latency).await;
    }

    Json(state.router.route(&request).await)
}
