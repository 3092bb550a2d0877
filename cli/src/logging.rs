// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Tracing subscriber setup

use anyhow::{Context, Result};
use clap::ValueEnum;

use ada_core::domain::node_config::NodeConfigManifest;

const DEFAULT_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "compact" | "pretty" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

pub struct LoggingSettings;

impl LoggingSettings {
    /// CLI flags win over `spec.observability.logging`, which wins over defaults.
    pub fn resolve(
        level: Option<&str>,
        format: Option<LogFormat>,
        config: Option<&NodeConfigManifest>,
    ) -> (String, LogFormat) {
        let logging = config
            .and_then(|c| c.spec.observability.as_ref())
            .and_then(|o| o.logging.as_ref());

        let level = level
            .map(String::from)
            .or_else(|| logging.map(|l| l.level.clone()))
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());

        let format = format
            .or_else(|| logging.and_then(|l| LogFormat::parse(&l.format)))
            .unwrap_or(LogFormat::Text);

        (level, format)
    }
}

/// Initialize tracing subscriber. `RUST_LOG` wins over `level`.
pub fn init_logging(level: &str, format: LogFormat) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Text => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }

    Ok(())
}
