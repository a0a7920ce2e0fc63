// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Evofit Core Structures
//!
//! The most core library of the evofit workspace. It defines the two
//! pieces of logic every other crate builds on:
//!
//! - [`normalizer`] - canonicalization of raw flag-vector and
//!   activity-matrix payloads into fixed-shape text
//! - [`counters`] - the process-wide named statistics counters
//!
//! Both are free of I/O and transport concerns.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod counters;
pub mod normalizer;

pub use counters::StatCounters;
pub use normalizer::{normalize_activities, normalize_flags};
