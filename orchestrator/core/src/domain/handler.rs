// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Domain handler contract
//!
//! The router owns exactly one handler per [`Domain`] and selects by tag.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::chat::ChatResponse;

/// Closed set of domains the dispatcher can service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Finance,
    Technical,
    Legal,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Finance, Domain::Technical, Domain::Legal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Technical => "technical",
            Self::Legal => "legal",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turns prompt text into a structured response.
///
/// Implementations extract parameters best-effort and fall back to documented
/// defaults; `process` never fails.
pub trait DomainHandler: Send + Sync {
    fn domain(&self) -> Domain;

    fn process(&self, prompt: &str) -> ChatResponse;
}
