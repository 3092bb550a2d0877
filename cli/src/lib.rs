// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Ada Stargate CLI library - exposes testable components
//!
//! # Architecture
//!
//! - **Layer:** Interface / Presentation Layer
//! - **Purpose:** Command handlers, daemon server, embedded routing

pub mod commands;
pub mod daemon;
pub mod embedded;
pub mod logging;
