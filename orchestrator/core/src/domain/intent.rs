// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Intent
//!
//! Contract of the optional external classifier. The classification attempt
//! returns an explicit result; the router inspects it to pick the next branch.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::domain::handler::Domain;
use crate::domain::llm::ModelError;

/// What the classifier said about a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Crisp category with a dedicated handler
    Domain(Domain),
    /// Crisp category without a handler
    General,
    /// A single label that is not one of the known categories
    Unrecognized(String),
    /// The model answered the prompt instead of classifying it
    Answer(String),
}

impl Classification {
    /// Interprets raw model output.
    ///
    /// Labels are matched after trimming decoration (`**LEGAL**`, `"Finance."`)
    /// and upper-casing. A lone unknown word is `Unrecognized`; anything with
    /// whitespace in it is treated as a direct answer and kept as written.
    pub fn from_model_output(output: &str) -> Result<Self, ClassifierError> {
        let trimmed = output.trim();
        if trimmed.is_empty() {
            return Err(ClassifierError::EmptyOutput);
        }

        let label = trimmed
            .trim_matches(|c: char| !c.is_alphanumeric() && c != '_')
            .to_ascii_uppercase();

        let classification = match label.as_str() {
            "FINANCE" | "FINANCIAL" => Self::Domain(Domain::Finance),
            "TECHNIC" | "TECHNICAL" => Self::Domain(Domain::Technical),
            "LEGAL" => Self::Domain(Domain::Legal),
            "GENERAL" => Self::General,
            _ if !label.is_empty() && !label.contains(char::is_whitespace) => {
                Self::Unrecognized(label)
            }
            _ => Self::Answer(trimmed.to_string()),
        };

        Ok(classification)
    }
}

/// Optional capability: given text, return a category or fail.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Name reported by the health endpoint
    fn provider(&self) -> &str;

    async fn classify(&self, prompt: &str) -> Result<Classification, ClassifierError>;
}

#[derive(Debug, Clone, Error)]
pub enum ClassifierError {
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),

    #[error("Classifier timed out after {0:?}")]
    Timeout(Duration),

    #[error("Classifier model call failed: {0}")]
    Model(#[from] ModelError),

    #[error("Classifier returned empty output")]
    EmptyOutput,

    #[error("Failed to build classification prompt: {0}")]
    Prompt(String),
}

impl ClassifierError {
    /// Short label used for metrics
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "unavailable",
            Self::Timeout(_) => "timeout",
            Self::Model(e) => e.kind(),
            Self::EmptyOutput => "empty_output",
            Self::Prompt(_) => "prompt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crisp_labels() {
        assert_eq!(
            Classification::from_model_output("FINANCE").unwrap(),
            Classification::Domain(Domain::Finance)
        );
        assert_eq!(
            Classification::from_model_output("technic\n").unwrap(),
            Classification::Domain(Domain::Technical)
        );
        assert_eq!(
            Classification::from_model_output("**Legal**").unwrap(),
            Classification::Domain(Domain::Legal)
        );
        assert_eq!(
            Classification::from_model_output("\"General.\"").unwrap(),
            Classification::General
        );
    }

    #[test]
    fn test_unknown_single_label() {
        assert_eq!(
            Classification::from_model_output("WEATHER").unwrap(),
            Classification::Unrecognized("WEATHER".to_string())
        );
    }

    #[test]
    fn test_free_form_answer_kept_verbatim() {
        let output = "  The marina office opens at 08:00.  ";
        assert_eq!(
            Classification::from_model_output(output).unwrap(),
            Classification::Answer("The marina office opens at 08:00.".to_string())
        );
    }

    #[test]
    fn test_empty_output_is_error() {
        assert!(matches!(
            Classification::from_model_output("   \n"),
            Err(ClassifierError::EmptyOutput)
        ));
    }

    #[test]
    fn test_punctuation_only_is_answer() {
        assert_eq!(
            Classification::from_model_output("?!").unwrap(),
            Classification::Answer("?!".to_string())
        );
    }
}
