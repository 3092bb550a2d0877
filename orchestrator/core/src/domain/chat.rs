// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Chat
//!
//! Request/response model exchanged between the boundary adapter and the
//! intent router.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Inbound instruction, proposed follow-up actions, response provenance
//!
//! Wire names follow the frontend contract (`user_role`, `node`, `action`,
//! `params`) while the Rust names describe what the fields mean.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Text used when a response would otherwise carry an empty body.
const EMPTY_TEXT_PLACEHOLDER: &str = "No content was produced for this request.";

/// Inbound "submit chat request" payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Free-text instruction. Expected to be non-empty but never rejected.
    pub prompt: String,

    /// Role of the caller. Logged only; routing ignores it.
    #[serde(rename = "user_role", alias = "requester_role", default)]
    pub requester_role: RequesterRole,

    /// Auxiliary data, reserved for forward compatibility.
    #[serde(default)]
    pub context: HashMap<String, serde_json::Value>,
}

impl ChatRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            requester_role: RequesterRole::default(),
            context: HashMap::new(),
        }
    }

    pub fn with_role(mut self, role: RequesterRole) -> Self {
        self.requester_role = role;
        self
    }

    pub fn with_context(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.context.insert(key.into(), value);
        self
    }
}

/// Caller role. Unknown roles are kept verbatim instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequesterRole {
    #[default]
    Guest,
    Captain,
    GeneralManager,
    Other(String),
}

impl RequesterRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Guest => "GUEST",
            Self::Captain => "CAPTAIN",
            Self::GeneralManager => "GENERAL_MANAGER",
            Self::Other(role) => role,
        }
    }
}

impl From<String> for RequesterRole {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "" | "GUEST" => Self::Guest,
            "CAPTAIN" => Self::Captain,
            "GENERAL_MANAGER" => Self::GeneralManager,
            _ => Self::Other(value),
        }
    }
}

impl From<RequesterRole> for String {
    fn from(role: RequesterRole) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for RequesterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A described-but-unexecuted external effect. Downstream executors decide
/// whether to act on it; the dispatcher never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedAction {
    #[serde(rename = "node")]
    target_node: String,
    #[serde(rename = "action")]
    action_name: String,
    #[serde(rename = "params", default)]
    parameters: BTreeMap<String, serde_json::Value>,
}

impl ProposedAction {
    pub fn new(
        target_node: impl Into<String>,
        action_name: impl Into<String>,
        parameters: BTreeMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            target_node: target_node.into(),
            action_name: action_name.into(),
            parameters,
        }
    }

    /// Subsystem expected to execute the action (e.g. `ada.finance`)
    pub fn target_node(&self) -> &str {
        &self.target_node
    }

    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    pub fn parameters(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.parameters
    }

    pub fn parameter(&self, key: &str) -> Option<&serde_json::Value> {
        self.parameters.get(key)
    }
}

/// Which resolution path produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseMode {
    /// Text came straight from the classifier's free-form answer
    Ai,
    /// Deterministic handler chosen by keyword heuristics (or default response)
    Simulation,
    /// Deterministic handler chosen by the classifier
    AiAssisted,
}

impl ResponseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "AI",
            Self::Simulation => "SIMULATION",
            Self::AiAssisted => "AI_ASSISTED",
        }
    }
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured reply: human-readable text plus ordered proposed actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub text: String,
    #[serde(default)]
    pub actions: Vec<ProposedAction>,
    pub mode: ResponseMode,
}

impl ChatResponse {
    pub fn new(text: impl Into<String>, actions: Vec<ProposedAction>, mode: ResponseMode) -> Self {
        let text = text.into();
        let text = if text.trim().is_empty() {
            EMPTY_TEXT_PLACEHOLDER.to_string()
        } else {
            text
        };
        Self { text, actions, mode }
    }

    /// Simulated handler output with no external effect
    pub fn simulation(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new(), ResponseMode::Simulation)
    }

    /// Free-form answer produced by the classifier
    pub fn direct(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new(), ResponseMode::Ai)
    }

    pub fn with_mode(mut self, mode: ResponseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn first_action(&self) -> Option<&ProposedAction> {
        self.actions.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults() {
        let request: ChatRequest = serde_json::from_value(json!({ "prompt": "hello" })).unwrap();
        assert_eq!(request.requester_role, RequesterRole::Guest);
        assert!(request.context.is_empty());
    }

    #[test]
    fn test_request_role_aliases() {
        let request: ChatRequest =
            serde_json::from_value(json!({ "prompt": "x", "user_role": "CAPTAIN" })).unwrap();
        assert_eq!(request.requester_role, RequesterRole::Captain);

        let request: ChatRequest =
            serde_json::from_value(json!({ "prompt": "x", "requester_role": "general_manager" }))
                .unwrap();
        assert_eq!(request.requester_role, RequesterRole::GeneralManager);

        let request: ChatRequest =
            serde_json::from_value(json!({ "prompt": "x", "user_role": "HARBOUR_MASTER" })).unwrap();
        assert_eq!(
            request.requester_role,
            RequesterRole::Other("HARBOUR_MASTER".to_string())
        );
        assert_eq!(request.requester_role.as_str(), "HARBOUR_MASTER");
    }

    #[test]
    fn test_action_wire_names() {
        let mut params = BTreeMap::new();
        params.insert("date".to_string(), json!("2025-11-20"));
        let action = ProposedAction::new("ada.technic", "schedule_service", params);

        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["node"], "ada.technic");
        assert_eq!(value["action"], "schedule_service");
        assert_eq!(value["params"]["date"], "2025-11-20");
    }

    #[test]
    fn test_mode_wire_names() {
        assert_eq!(serde_json::to_value(ResponseMode::Ai).unwrap(), json!("AI"));
        assert_eq!(
            serde_json::to_value(ResponseMode::AiAssisted).unwrap(),
            json!("AI_ASSISTED")
        );
        assert_eq!(
            serde_json::to_value(ResponseMode::Simulation).unwrap(),
            json!("SIMULATION")
        );
    }

    #[test]
    fn test_response_text_never_empty() {
        let response = ChatResponse::direct("   ");
        assert!(!response.text.trim().is_empty());
        assert_eq!(response.mode, ResponseMode::Ai);
    }
}
