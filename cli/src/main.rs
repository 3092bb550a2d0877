// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! # Ada Stargate CLI
//!
//! The `ada` binary runs the dispatcher node and talks to it.
//!
//! ## Architecture
//!
//! - **Default mode**: CLI commands delegate to the daemon if running, else route in-process
//! - **Daemon mode**: `ada --daemon` serves the HTTP API in the foreground
//! - **Detection**: HTTP health check against the configured address
//!
//! ## Commands
//!
//! - `ada chat <PROMPT>` - Route a single instruction
//! - `ada status` - Show node health
//! - `ada config show|validate|generate` - Configuration management

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use ada_core::domain::node_config::NodeConfigManifest;
use ada_stargate::commands::{self, ChatArgs, ConfigCommand, Endpoint};
use ada_stargate::daemon;
use ada_stargate::logging::{init_logging, LogFormat, LoggingSettings};

/// Ada Stargate - marina operations dispatcher
#[derive(Parser)]
#[command(name = "ada")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Run the HTTP daemon in the foreground
    #[arg(long, global = true)]
    daemon: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, env = "ADA_CONFIG_PATH", value_name = "FILE")]
    config: Option<PathBuf>,

    /// HTTP API host (default: spec.network.bind_address)
    #[arg(long, global = true, env = "ADA_HOST")]
    host: Option<String>,

    /// HTTP API port (default: spec.network.port)
    #[arg(long, global = true, env = "ADA_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error); default: spec.observability.logging.level
    #[arg(long, global = true, env = "ADA_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log output format; default: spec.observability.logging.format
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Route one instruction and print the response
    #[command(name = "chat")]
    Chat(ChatArgs),

    /// Show node health and classifier availability
    #[command(name = "status")]
    Status,

    /// Configuration management
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Loaded before the subscriber exists so the file can set the log level;
    // errors are reported once logging is up.
    let loaded = NodeConfigManifest::load_or_default(cli.config.clone());
    let (level, format) = LoggingSettings::resolve(
        cli.log_level.as_deref(),
        cli.log_format,
        loaded.as_ref().ok(),
    );
    init_logging(&level, format)?;

    let command = match cli.command {
        // `config validate` reports load errors itself
        Some(Commands::Config { command }) => {
            return commands::config::handle_command(command, cli.config).await;
        }
        other => other,
    };

    let config = loaded.context("Failed to load configuration")?;
    let endpoint = Endpoint::resolve(&config, cli.host, cli.port);

    if cli.daemon {
        info!("Starting Ada Stargate in daemon mode");
        return daemon::start_daemon(config, endpoint).await;
    }

    match command {
        Some(Commands::Chat(args)) => commands::chat::handle_command(args, &config, &endpoint).await,
        Some(Commands::Status) => commands::status::handle_command(&endpoint).await,
        _ => {
            eprintln!("{}", "No command specified. Use --help for usage.".yellow());
            std::process::exit(1);
        }
    }
}
