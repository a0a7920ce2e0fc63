// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Console output with an `EnvFilter`. `RUST_LOG` wins over the
//! configured default level when set.

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Initialize console logging
///
/// `default_level` is the filter directive used when `RUST_LOG` is not
/// set (typically the configured `system.log_level`).
///
/// Safe to call more than once: subsequent calls fail with an error
/// instead of panicking, which keeps test harnesses that share a process
/// working.
pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .with_context(|| format!("invalid log filter directive '{}'", default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("failed to set global tracing subscriber: {}", e))?;

    Ok(())
}
