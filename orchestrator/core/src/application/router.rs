// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Intent Router
//!
//! Single entry point of the core: turns a [`ChatRequest`] into exactly one
//! [`ChatResponse`]. Resolution order:
//!
//! 1. Optional classifier (one attempt, bounded by a timeout)
//! 2. Keyword heuristics in fixed priority order
//! 3. Default response
//!
//! Classifier failures are logged and counted, never surfaced to the caller.
//!
//! # Architecture
//!
//! - **Layer:** Application Layer
//! - **Purpose:** Decide which handler (if any) services a prompt and stamp provenance

use metrics::counter;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::application::handlers::DomainHandlers;
use crate::domain::chat::{ChatRequest, ChatResponse, ResponseMode};
use crate::domain::handler::Domain;
use crate::domain::intent::{Classification, ClassifierError, IntentClassifier};

/// Keyword sets, checked in this order. First match wins.
const KEYWORDS: [(Domain, &[&str]); 3] = [
    (Domain::Finance, &["invoice", "pay", "debt", "money", "bill"]),
    (
        Domain::Technical,
        &["repair", "service", "technic", "fix", "schedule", "lift"],
    ),
    (Domain::Legal, &["law", "rule", "contract", "penalty", "legal"]),
];

pub const DEFAULT_CLASSIFIER_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of the routing decision, before any handler runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Run the handler for `domain`; `provenance` is stamped on its response
    Dispatch {
        domain: Domain,
        provenance: ResponseMode,
    },
    /// The classifier answered the prompt itself
    Direct(String),
    /// Nothing matched
    Default,
}

impl RouteDecision {
    /// Label used for the `route` metrics dimension
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dispatch { domain, .. } => domain.as_str(),
            Self::Direct(_) => "direct",
            Self::Default => "default",
        }
    }
}

pub struct IntentRouter {
    handlers: DomainHandlers,
    classifier: Option<Arc<dyn IntentClassifier>>,
    classifier_timeout: Duration,
}

impl IntentRouter {
    pub fn new(
        handlers: DomainHandlers,
        classifier: Option<Arc<dyn IntentClassifier>>,
        classifier_timeout: Duration,
    ) -> Self {
        Self {
            handlers,
            classifier,
            classifier_timeout,
        }
    }

    /// Router without a classifier; every decision is heuristic.
    pub fn heuristic(handlers: DomainHandlers) -> Self {
        Self::new(handlers, None, DEFAULT_CLASSIFIER_TIMEOUT)
    }

    pub fn classifier_provider(&self) -> Option<&str> {
        self.classifier.as_ref().map(|c| c.provider())
    }

    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    pub async fn route(&self, request: &ChatRequest) -> ChatResponse {
        info!(
            role = %request.requester_role,
            prompt_len = request.prompt.len(),
            "Routing chat request"
        );

        let decision = self.decide(&request.prompt).await;
        let route = decision.label();
        let response = self.execute(&request.prompt, decision);

        counter!("ada_requests_total", "mode" => response.mode.as_str(), "route" => route)
            .increment(1);
        debug!(mode = %response.mode, route, actions = response.actions.len(), "Request routed");

        response
    }

    pub async fn decide(&self, prompt: &str) -> RouteDecision {
        if let Some(classification) = self.classify(prompt).await {
            match classification {
                Classification::Domain(domain) => {
                    return RouteDecision::Dispatch {
                        domain,
                        provenance: ResponseMode::AiAssisted,
                    };
                }
                Classification::Answer(text) => return RouteDecision::Direct(text),
                Classification::General => {
                    debug!("Classifier returned GENERAL, falling back to keywords");
                }
                Classification::Unrecognized(label) => {
                    debug!(%label, "Classifier returned unknown label, falling back to keywords");
                }
            }
        }

        match heuristic_domain(prompt) {
            Some(domain) => RouteDecision::Dispatch {
                domain,
                provenance: ResponseMode::Simulation,
            },
            None => RouteDecision::Default,
        }
    }

    pub fn execute(&self, prompt: &str, decision: RouteDecision) -> ChatResponse {
        match decision {
            RouteDecision::Dispatch { domain, provenance } => self
                .handlers
                .get(domain)
                .process(prompt)
                .with_mode(provenance),
            RouteDecision::Direct(text) => ChatResponse::direct(text),
            RouteDecision::Default => default_response(prompt),
        }
    }

    async fn classify(&self, prompt: &str) -> Option<Classification> {
        let classifier = self.classifier.as_ref()?;

        let result = tokio::time::timeout(self.classifier_timeout, classifier.classify(prompt))
            .await
            .unwrap_or(Err(ClassifierError::Timeout(self.classifier_timeout)));

        match result {
            Ok(classification) => Some(classification),
            Err(e) => {
                warn!(
                    provider = classifier.provider(),
                    error = %e,
                    "Intent classification failed, using keyword routing"
                );
                counter!("ada_classifier_failures_total", "reason" => e.reason()).increment(1);
                None
            }
        }
    }
}

/// Case-insensitive substring match against the fixed keyword sets.
pub fn heuristic_domain(prompt: &str) -> Option<Domain> {
    let prompt = prompt.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| prompt.contains(w)))
        .map(|(domain, _)| *domain)
}

pub fn default_response(prompt: &str) -> ChatResponse {
    ChatResponse::simulation(format!(
        "**ADA CORE (SIMULATION):** I received: '{}'.\n\
         Please specify a domain: Finance, Technical, or Legal.",
        prompt
    ))
}
