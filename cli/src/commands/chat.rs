// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! `ada chat`: route one instruction through the daemon, or in-process when
//! no daemon answers.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::collections::HashMap;
use tracing::debug;

use ada_core::domain::chat::{ChatRequest, ChatResponse, RequesterRole, ResponseMode};
use ada_core::domain::node_config::NodeConfigManifest;
use ada_sdk::AdaClient;

use super::Endpoint;
use crate::daemon::{check_daemon_running, DaemonStatus};
use crate::embedded::EmbeddedExecutor;

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Instruction to route
    #[arg(value_name = "PROMPT")]
    pub prompt: String,

    /// Requester role (GUEST, CAPTAIN, GENERAL_MANAGER, ...)
    #[arg(long)]
    pub role: Option<String>,

    /// Auxiliary context as a JSON object
    #[arg(long, value_name = "JSON")]
    pub context: Option<String>,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

impl ChatArgs {
    pub fn to_request(&self) -> Result<ChatRequest> {
        let mut request = ChatRequest::new(self.prompt.clone());

        if let Some(role) = &self.role {
            request = request.with_role(RequesterRole::from(role.clone()));
        }

        if let Some(raw) = &self.context {
            let context: HashMap<String, serde_json::Value> =
                serde_json::from_str(raw).context("--context must be a JSON object")?;
            request.context = context;
        }

        Ok(request)
    }
}

pub async fn handle_command(
    args: ChatArgs,
    config: &NodeConfigManifest,
    endpoint: &Endpoint,
) -> Result<()> {
    let request = args.to_request()?;

    let response = match check_daemon_running(endpoint).await {
        DaemonStatus::Running { .. } => {
            debug!("Delegating to daemon at {}", endpoint.base_url());
            AdaClient::new(endpoint.base_url())
                .chat(&request)
                .await
                .context("Daemon rejected the chat request")?
        }
        status => {
            debug!("Daemon not available ({:?}), routing in-process", status);
            config
                .validate()
                .context("Configuration validation failed")?;
            EmbeddedExecutor::new(config).chat(&request).await
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_response(&response);
    }

    Ok(())
}

fn print_response(response: &ChatResponse) {
    let mode = match response.mode {
        ResponseMode::Ai => response.mode.as_str().magenta(),
        ResponseMode::AiAssisted => response.mode.as_str().cyan(),
        ResponseMode::Simulation => response.mode.as_str().yellow(),
    };
    println!("[{}]", mode.bold());
    println!();
    println!("{}", response.text);

    if response.actions.is_empty() {
        return;
    }

    println!();
    println!("{}", "Proposed actions:".bold());
    for action in &response.actions {
        println!("  {} → {}", action.target_node().bold(), action.action_name());
        for (key, value) in action.parameters() {
            println!("    {}: {}", key.dimmed(), value);
        }
    }
}
