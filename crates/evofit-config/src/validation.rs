// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Sanity checks applied after loading and before the server boots.

use crate::{ConfigError, ConfigResult, EvofitConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a loaded configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` when a value cannot be used to
/// boot the server (port 0, unknown log level).
pub fn validate_config(config: &EvofitConfig) -> ConfigResult<()> {
    if config.api.port == 0 {
        return Err(ConfigError::ValidationError(
            "api.port must be non-zero".to_string(),
        ));
    }

    let level = config.system.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "unknown log level '{}' (expected one of: {})",
            config.system.log_level,
            LOG_LEVELS.join(", ")
        )));
    }

    Ok(())
}
