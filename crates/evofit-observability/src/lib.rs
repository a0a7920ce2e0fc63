// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Evofit Observability
//!
//! Unified logging initialization for the evofit server. All crates emit
//! through `tracing` with a per-crate `target:`; this crate wires the
//! subscriber.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod init;

pub use init::init_logging;
