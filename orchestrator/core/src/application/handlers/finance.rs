// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Finance handler: drafts a simulated invoice for the first amount in the prompt.

use regex::Regex;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use crate::domain::chat::{ChatResponse, ProposedAction, ResponseMode};
use crate::domain::handler::{Domain, DomainHandler};
use crate::domain::node_config::SimulationConfig;
use crate::domain::workers::{calculate_invoice, Invoice, ReferenceIssuer, DEFAULT_VAT_RATE};

pub const FINANCE_NODE: &str = "ada.finance";
pub const CREATE_INVOICE: &str = "create_invoice";

static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("static amount pattern"));

pub struct FinanceHandler {
    vat_rate: f64,
    default_amount: f64,
    default_invoice: Invoice,
    currency: String,
    references: Arc<dyn ReferenceIssuer>,
}

impl FinanceHandler {
    /// Out-of-range simulation values are replaced by the built-in defaults.
    pub fn new(config: &SimulationConfig, references: Arc<dyn ReferenceIssuer>) -> Self {
        let builtin = SimulationConfig::default();

        let vat_rate = match calculate_invoice(0.0, config.vat_rate) {
            Ok(_) => config.vat_rate,
            Err(e) => {
                tracing::warn!(error = %e, "Configured VAT rate rejected, using {}", DEFAULT_VAT_RATE);
                DEFAULT_VAT_RATE
            }
        };

        let default_invoice = calculate_invoice(config.default_amount, vat_rate)
            .or_else(|e| {
                tracing::warn!(error = %e, "Configured default amount rejected, using {}", builtin.default_amount);
                calculate_invoice(builtin.default_amount, vat_rate)
            })
            .unwrap_or_default();

        Self {
            vat_rate,
            default_amount: default_invoice.subtotal,
            default_invoice,
            currency: config.currency.clone(),
            references,
        }
    }

    /// First integer-looking substring, or the configured default.
    pub fn extract_amount(&self, prompt: &str) -> f64 {
        AMOUNT_PATTERN
            .find(prompt)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .filter(|amount| amount.is_finite())
            .unwrap_or(self.default_amount)
    }

    fn invoice_for(&self, amount: f64) -> Invoice {
        calculate_invoice(amount, self.vat_rate).unwrap_or_else(|e| {
            tracing::warn!(amount, error = %e, "Invoice calculation rejected input, using default amount");
            self.default_invoice
        })
    }
}

impl DomainHandler for FinanceHandler {
    fn domain(&self) -> Domain {
        Domain::Finance
    }

    fn process(&self, prompt: &str) -> ChatResponse {
        let amount = self.extract_amount(prompt);
        let invoice = self.invoice_for(amount);
        let invoice_id = format!("{}-SIM", self.references.issue("INV"));
        let symbol = currency_symbol(&self.currency);

        tracing::debug!(%invoice_id, subtotal = invoice.subtotal, total = invoice.total, "Drafted simulated invoice");

        let text = format!(
            "**FINANCE (SIMULATION):** Invoice {id} drafted.\n\n\
             - Subtotal: {sym}{subtotal:.2}\n\
             - VAT ({pct}%): {sym}{vat:.2}\n\
             - Total: {sym}{total:.2}\n\n\
             *Simulation only: no ledger entry was created.*",
            id = invoice_id,
            sym = symbol,
            subtotal = invoice.subtotal,
            pct = round_cents(invoice.vat_percent()),
            vat = invoice.vat,
            total = invoice.total,
        );

        let mut params = BTreeMap::new();
        params.insert("id".to_string(), json!(invoice_id));
        params.insert("subtotal".to_string(), json!(round_cents(invoice.subtotal)));
        params.insert("vat".to_string(), json!(round_cents(invoice.vat)));
        params.insert("total".to_string(), json!(round_cents(invoice.total)));
        params.insert("currency".to_string(), json!(self.currency));
        params.insert("status".to_string(), json!("DRAFT_SIMULATED"));

        ChatResponse::new(
            text,
            vec![ProposedAction::new(FINANCE_NODE, CREATE_INVOICE, params)],
            ResponseMode::Simulation,
        )
    }
}

/// Values too large to carry cents are returned unchanged.
fn round_cents(value: f64) -> f64 {
    let cents = value * 100.0;
    if cents.is_finite() {
        cents.round() / 100.0
    } else {
        value
    }
}

fn currency_symbol(code: &str) -> String {
    match code.to_ascii_uppercase().as_str() {
        "EUR" => "€".to_string(),
        "USD" => "$".to_string(),
        "GBP" => "£".to_string(),
        "TRY" => "₺".to_string(),
        other => format!("{} ", other),
    }
}
