// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Presentation Layer (`ada-stargate-core`)
//!
//! HTTP surface that translates external requests into router calls. No
//! business logic lives here; all real work is delegated to
//! `crate::application`.
//!
//! | Module | Transport | Description |
//! |--------|-----------|-------------|
//! | [`api`] | HTTP (Axum) | Health probe and chat endpoint |

pub mod api;

pub use api::{app, AppState};
