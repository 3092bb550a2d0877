// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Ada Stargate Rust SDK
//!
//! Typed client for a running Ada Stargate node.

pub mod client;

pub use ada_core::domain::chat::{ChatRequest, ChatResponse, ProposedAction, RequesterRole, ResponseMode};
pub use ada_core::domain::health::HealthStatus;
pub use client::AdaClient;
