// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Classification Prompt Templates
//!
//! Renders the instruction sent to the classifier model, using Handlebars
//! for placeholder substitution. Output is plain text, so HTML escaping is
//! disabled and missing variables render as empty strings.
//!
//! # Supported Placeholders
//!
//! - `{{prompt}}` - The user's instruction
//! - `{{role}}` - Requester role, when known
//! - `{{#each labels}}` - Category labels the model may answer with

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Labels offered to the model, in display order
pub const CLASSIFICATION_LABELS: [&str; 4] = ["FINANCE", "TECHNIC", "LEGAL", "GENERAL"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationContext {
    pub prompt: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    pub labels: Vec<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extras: HashMap<String, serde_json::Value>,
}

impl ClassificationContext {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            role: None,
            labels: CLASSIFICATION_LABELS.iter().map(|l| l.to_string()).collect(),
            extras: HashMap::new(),
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extras.insert(key.into(), value);
        self
    }
}

pub struct PromptTemplateEngine {
    handlebars: Handlebars<'static>,
}

impl PromptTemplateEngine {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);
        Self { handlebars }
    }

    pub fn render(&self, template: &str, context: &ClassificationContext) -> Result<String> {
        self.handlebars
            .render_template(template, context)
            .context("Failed to render classification prompt")
    }

    /// Renders `template`, or [`Self::default_template`] when none is configured.
    pub fn render_with_fallback(
        &self,
        template: Option<&str>,
        context: &ClassificationContext,
    ) -> Result<String> {
        self.render(template.unwrap_or(Self::default_template()), context)
    }

    pub fn default_template() -> &'static str {
        "You are the intent router of a marina operations assistant.\n\
         Classify the request into exactly one category and reply with the label only:\n\
         {{#each labels}}- {{this}}\n{{/each}}\
         If the request is small talk that needs no department, you may answer it directly \
         in one or two sentences instead of giving a label.\n\n\
         {{#if role}}Requester role: {{role}}\n{{/if}}\
         Request: {{prompt}}"
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        handlebars::template::Template::compile(template)
            .map(|_| ())
            .context("Invalid Handlebars template syntax")
    }
}

impl Default for PromptTemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
