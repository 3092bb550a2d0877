// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

pub mod classifier;
pub mod llm;
pub mod prompt;

pub use classifier::ModelIntentClassifier;
pub use prompt::PromptTemplateEngine;
