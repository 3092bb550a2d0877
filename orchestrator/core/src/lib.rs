// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Ada Stargate core
//!
//! Intent routing for a marina operations assistant: a chat request is
//! matched to a Finance, Technical or Legal handler (by an optional model
//! classifier, then keyword heuristics) and answered with text plus
//! proposed, never executed, actions.
//!
//! # Architecture
//!
//! - **Layer:** Core System
//! - **Purpose:** Domain types, handlers, router, classifier adapters, HTTP surface

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
