// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Configuration management commands
//!
//! Commands: show, validate, generate

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use std::path::PathBuf;

use ada_core::domain::node_config::{NodeConfigManifest, CONFIG_PATH_ENV};

pub const MINIMAL_TEMPLATE: &str = include_str!("../../templates/config-minimal.yaml");
pub const EXAMPLES_TEMPLATE: &str = include_str!("../../templates/config-with-examples.yaml");

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show config file paths checked
        #[arg(long)]
        paths: bool,
    },

    /// Validate configuration file
    Validate {
        /// Path to config file (default: discover)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Generate sample configuration
    Generate {
        /// Output path (default: ./ada-config.yaml)
        #[arg(short, long, default_value = "./ada-config.yaml")]
        output: PathBuf,

        /// Include examples and comments
        #[arg(long)]
        examples: bool,
    },
}

pub async fn handle_command(
    command: ConfigCommand,
    config_override: Option<PathBuf>,
) -> Result<()> {
    match command {
        ConfigCommand::Show { paths } => show(config_override, paths).await,
        ConfigCommand::Validate { file } => validate(file.or(config_override)).await,
        ConfigCommand::Generate { output, examples } => generate(output, examples).await,
    }
}

async fn show(config_override: Option<PathBuf>, show_paths: bool) -> Result<()> {
    if show_paths {
        println!("{}", "Configuration discovery paths:".bold());
        match &config_override {
            Some(path) => println!("  1. --config flag: {}", path.display()),
            None => println!("  1. --config flag: {}", "(not set)".dimmed()),
        }
        println!(
            "  2. {}: {}",
            CONFIG_PATH_ENV,
            std::env::var(CONFIG_PATH_ENV)
                .unwrap_or_else(|_| "(not set)".to_string())
                .dimmed()
        );
        println!("  3. ./ada-config.yaml");
        println!("  4. ~/.ada/config.yaml");
        println!("  5. /etc/ada/config.yaml");
        println!();
    }

    let config = NodeConfigManifest::load_or_default(config_override)
        .context("Failed to load configuration")?;

    println!("{}", "Current configuration:".bold());
    println!();

    println!("{}", "Node Identity:".bold());
    println!("  Name: {}", config.metadata.name);
    println!("  ID: {}", config.spec.node.id);
    if let Some(region) = &config.spec.node.region {
        println!("  Region: {}", region);
    }
    println!();

    let network = &config.spec.network;
    println!("{}", "Network:".bold());
    println!("  Listen: {}:{}", network.bind_address, network.port);
    println!("  CORS origins: {}", network.cors_origins.join(", "));
    if !network.simulated_latency.is_zero() {
        println!("  Simulated latency: {:?}", network.simulated_latency);
    }
    println!();

    println!("{}", "Classifier:".bold());
    match &config.spec.classifier {
        Some(classifier) => {
            let state = if classifier.is_active() {
                "enabled".green()
            } else {
                "disabled".yellow()
            };
            println!("  {} ({})", classifier.provider_type.as_str().bold(), state);
            println!("    Endpoint: {}", classifier.endpoint());
            println!("    Model: {}", classifier.model);
            println!("    Timeout: {:?}", classifier.timeout);
            if classifier.prompt_template.is_some() {
                println!("    Prompt template: custom");
            }
        }
        None => println!("  {}", "(none, keyword routing only)".dimmed()),
    }
    println!();

    let simulation = &config.spec.simulation;
    println!("{}", "Simulation:".bold());
    println!("  VAT rate: {}", simulation.vat_rate);
    println!(
        "  Default amount: {} {}",
        simulation.default_amount, simulation.currency
    );
    println!("  Blocked days: {:?}", simulation.blocked_days);
    println!("  Default service date: {}", simulation.default_service_date);
    println!("  Service type: {}", simulation.service_type);
    println!();

    Ok(())
}

async fn validate(config_path: Option<PathBuf>) -> Result<()> {
    println!("Validating configuration...");

    let config = NodeConfigManifest::load_or_default(config_path)
        .context("Failed to load configuration")?;

    config
        .validate()
        .context("Configuration validation failed")?;

    println!("{}", "✓ Configuration is valid".green());

    Ok(())
}

async fn generate(output: PathBuf, with_examples: bool) -> Result<()> {
    let sample = if with_examples {
        EXAMPLES_TEMPLATE
    } else {
        MINIMAL_TEMPLATE
    };

    std::fs::write(&output, sample)
        .with_context(|| format!("Failed to write config to {:?}", output))?;

    println!(
        "{}",
        format!("✓ Configuration generated: {}", output.display()).green()
    );

    Ok(())
}
