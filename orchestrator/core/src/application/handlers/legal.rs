// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Legal handler: returns a fixed, citation-shaped answer in place of a
//! retrieval lookup against the marina regulations.

use crate::domain::chat::ChatResponse;
use crate::domain::handler::{Domain, DomainHandler};

pub const LEGAL_CITATION: &str = "**LEGAL (SIMULATION):** Querying Vector Database...\n\n\
**Result (WIM Regs Article H.3):**\n\
> 'Vessels cannot depart without settling outstanding debts.'\n\n\
*Context: Simulated RAG retrieval.*";

#[derive(Debug, Default, Clone, Copy)]
pub struct LegalHandler;

impl DomainHandler for LegalHandler {
    fn domain(&self) -> Domain {
        Domain::Legal
    }

    fn process(&self, _prompt: &str) -> ChatResponse {
        ChatResponse::simulation(LEGAL_CITATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::ResponseMode;

    #[test]
    fn test_fixed_citation() {
        let response = LegalHandler.process("what is the law on contracts");
        assert_eq!(response.text, LEGAL_CITATION);
        assert!(response.actions.is_empty());
        assert_eq!(response.mode, ResponseMode::Simulation);
        assert_eq!(LegalHandler.process("").text, response.text);
    }
}
