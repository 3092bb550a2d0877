// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Domain Handlers
//!
//! Simulated Finance, Technical and Legal handlers. Each extracts its
//! parameters from the prompt on a best-effort basis, calls the workers and
//! returns a `SIMULATION` response; the router re-stamps provenance.
//!
//! # Architecture
//!
//! - **Layer:** Application Layer
//! - **Purpose:** Turn prompt text into structured responses and proposed actions

pub mod finance;
pub mod legal;
pub mod technical;

pub use finance::FinanceHandler;
pub use legal::LegalHandler;
pub use technical::TechnicalHandler;

use std::sync::Arc;

use crate::domain::handler::{Domain, DomainHandler};
use crate::domain::node_config::SimulationConfig;
use crate::domain::workers::{RandomReferences, ReferenceIssuer};

/// Exactly one handler per [`Domain`].
pub struct DomainHandlers {
    finance: FinanceHandler,
    technical: TechnicalHandler,
    legal: LegalHandler,
}

impl DomainHandlers {
    pub fn new(finance: FinanceHandler, technical: TechnicalHandler, legal: LegalHandler) -> Self {
        Self {
            finance,
            technical,
            legal,
        }
    }

    /// Builds all three handlers from the simulation constants.
    pub fn from_config(config: &SimulationConfig, references: Arc<dyn ReferenceIssuer>) -> Self {
        Self {
            finance: FinanceHandler::new(config, references.clone()),
            technical: TechnicalHandler::new(config, references),
            legal: LegalHandler,
        }
    }

    pub fn get(&self, domain: Domain) -> &dyn DomainHandler {
        match domain {
            Domain::Finance => &self.finance,
            Domain::Technical => &self.technical,
            Domain::Legal => &self.legal,
        }
    }
}

impl Default for DomainHandlers {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default(), Arc::new(RandomReferences))
    }
}
