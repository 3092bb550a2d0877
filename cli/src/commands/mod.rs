// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Command implementations for the Ada CLI

pub mod chat;
pub mod config;
pub mod status;

pub use self::chat::ChatArgs;
pub use self::config::ConfigCommand;

use ada_core::domain::node_config::NodeConfigManifest;

/// Address of the node's HTTP API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    /// CLI flags win over `spec.network`.
    pub fn resolve(config: &NodeConfigManifest, host: Option<String>, port: Option<u16>) -> Self {
        Self {
            host: host.unwrap_or_else(|| config.spec.network.bind_address.clone()),
            port: port.unwrap_or(config.spec.network.port),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base URL for clients; a wildcard bind address is reached through loopback.
    pub fn base_url(&self) -> String {
        if self.host.starts_with("http://") || self.host.starts_with("https://") {
            return format!("{}:{}", self.host, self.port);
        }
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" | "[::]" => "127.0.0.1",
            other => other,
        };
        format!("http://{}:{}", host, self.port)
    }
}
