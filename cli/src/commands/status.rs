// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! `ada status`: report whether a node answers and how it routes.

use anyhow::Result;
use colored::Colorize;

use ada_sdk::AdaClient;

use super::Endpoint;

pub async fn handle_command(endpoint: &Endpoint) -> Result<()> {
    let base_url = endpoint.base_url();

    let health = match AdaClient::new(&base_url).health().await {
        Ok(health) => health,
        Err(e) => {
            println!("{} {}", "✗ Daemon is not reachable at".red(), base_url);
            println!("  {}", format!("{:#}", e).dimmed());
            println!("  Start it with: ada --daemon");
            return Ok(());
        }
    };

    println!("{} {}", "✓ Daemon is".green(), health.status.green().bold());
    println!("  Address: {}", base_url);
    println!("  Version: {}", health.version);
    println!("  Uptime: {}s", health.uptime_seconds);

    match &health.classifier_provider {
        Some(provider) if health.classifier_enabled => {
            println!("  Routing: {} ({})", "classifier + keywords".cyan(), provider);
        }
        _ => println!("  Routing: {}", "keywords only (simulation mode)".yellow()),
    }

    if !health.message.is_empty() {
        println!("  {}", health.message.dimmed());
    }

    Ok(())
}
