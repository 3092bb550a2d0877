// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Technical handler: books a simulated travel-lift slot for the first ISO
//! date in the prompt, unless the maintenance calendar blocks it.

use chrono::NaiveDate;
use regex::Regex;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use crate::domain::chat::{ChatResponse, ProposedAction, ResponseMode};
use crate::domain::handler::{Domain, DomainHandler};
use crate::domain::node_config::SimulationConfig;
use crate::domain::workers::{MaintenanceCalendar, ReferenceIssuer};

pub const TECHNIC_NODE: &str = "ada.technic";
pub const SCHEDULE_SERVICE: &str = "schedule_service";

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("static date pattern"));

pub struct TechnicalHandler {
    calendar: MaintenanceCalendar,
    default_date: String,
    service_type: String,
    references: Arc<dyn ReferenceIssuer>,
}

impl TechnicalHandler {
    pub fn new(config: &SimulationConfig, references: Arc<dyn ReferenceIssuer>) -> Self {
        Self {
            calendar: MaintenanceCalendar::new(config.blocked_days.clone()),
            default_date: config.default_service_date.clone(),
            service_type: config.service_type.clone(),
            references,
        }
    }

    /// First `YYYY-MM-DD` substring, or the configured placeholder.
    pub fn extract_date<'a>(&'a self, prompt: &'a str) -> &'a str {
        DATE_PATTERN
            .find(prompt)
            .map(|m| m.as_str())
            .unwrap_or(&self.default_date)
    }
}

impl DomainHandler for TechnicalHandler {
    fn domain(&self) -> Domain {
        Domain::Technical
    }

    fn process(&self, prompt: &str) -> ChatResponse {
        let date = self.extract_date(prompt);

        if self.calendar.is_blocked(date) {
            tracing::info!(date, "Requested service date is blocked by maintenance");
            return ChatResponse::simulation(format!(
                "**TECHNIC (SIMULATION):** Conflict detected. The travel lift is under \
                 maintenance on {}. Please resubmit the request with a different date.",
                date
            ));
        }

        let ticket_id = self.references.issue("TICKET");
        let when = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(parsed) => format!("{} ({})", date, parsed.format("%A")),
            Err(_) => date.to_string(),
        };

        let text = format!(
            "**TECHNIC (SIMULATION):** {} slot confirmed for {}.\n\
             Ticket: {}\n\n\
             *Simulation only: the yard calendar was not updated.*",
            self.service_type, when, ticket_id
        );

        let mut params = BTreeMap::new();
        params.insert("date".to_string(), json!(date));
        params.insert("ticket_id".to_string(), json!(ticket_id));
        params.insert("type".to_string(), json!(self.service_type));

        ChatResponse::new(
            text,
            vec![ProposedAction::new(TECHNIC_NODE, SCHEDULE_SERVICE, params)],
            ResponseMode::Simulation,
        )
    }
}
