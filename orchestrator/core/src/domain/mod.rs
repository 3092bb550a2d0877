// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Domain
//!
//! Pure types and contracts shared by every layer.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Chat model, handler and classifier contracts, workers, node configuration

pub mod chat;
pub mod handler;
pub mod health;
pub mod intent;
pub mod llm;
pub mod node_config;
pub mod workers;
