// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

pub mod handlers;
pub mod router;

// Re-export use cases for convenience
pub use handlers::{DomainHandlers, FinanceHandler, LegalHandler, TechnicalHandler};
pub use router::{heuristic_domain, IntentRouter, RouteDecision};
