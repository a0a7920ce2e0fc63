// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{ConfigError, ConfigResult, EvofitConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file searched for on disk
pub const CONFIG_FILE_NAME: &str = "evofit_configuration.toml";

/// Find the evofit configuration file
///
/// Search order:
/// 1. `EVOFIT_CONFIG_PATH` environment variable
/// 2. Current working directory: `./evofit_configuration.toml`
/// 3. Parent directories (up to 5 levels, for workspace roots)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any
/// location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("EVOFIT_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        } else {
            return Err(ConfigError::FileNotFound(format!(
                "Config file specified by EVOFIT_CONFIG_PATH not found: {}",
                path.display()
            )));
        }
    }

    let mut search_paths = Vec::new();

    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd.clone();
        for _ in 0..5 {
            if let Some(parent) = current.parent() {
                search_paths.push(parent.join(CONFIG_FILE_NAME));
                current = parent.to_path_buf();
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "Configuration file '{}' not found in any of these locations:\n{}\n\nSet EVOFIT_CONFIG_PATH to specify a custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, the file is
///   searched for.
/// * `cli_args` - Optional CLI argument overrides (dotted keys, e.g.
///   `api.port`)
///
/// # Returns
///
/// Complete `EvofitConfig` with all overrides applied
///
/// # Errors
///
/// Returns an error if the config file is not found or contains invalid
/// TOML
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<EvofitConfig> {
    let config_file = if let Some(path) = config_path {
        path.to_path_buf()
    } else {
        find_config_file()?
    };

    let content = fs::read_to_string(&config_file)?;

    let mut config: EvofitConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    // Apply overrides in order
    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `EVOFIT_API_HOST` -> `api.host`
/// - `EVOFIT_API_PORT` -> `api.port`
/// - `EVOFIT_LOG_LEVEL` -> `system.log_level`
/// - `EVOFIT_STORE_SNAPSHOT` -> `store.snapshot_path`
pub fn apply_environment_overrides(config: &mut EvofitConfig) {
    if let Ok(value) = env::var("EVOFIT_API_HOST") {
        config.api.host = value;
    }
    if let Ok(value) = env::var("EVOFIT_API_PORT") {
        if let Ok(port) = value.parse::<u16>() {
            config.api.port = port;
        }
    }
    if let Ok(value) = env::var("EVOFIT_LOG_LEVEL") {
        config.system.log_level = value;
    }
    if let Ok(value) = env::var("EVOFIT_STORE_SNAPSHOT") {
        config.store.snapshot_path = Some(PathBuf::from(value));
    }
}

/// Apply CLI argument overrides to configuration
///
/// Keys use the dotted section form of the TOML file, e.g. `api.port`.
/// Unknown keys and unparseable values are ignored.
pub fn apply_cli_overrides(config: &mut EvofitConfig, cli_args: &HashMap<String, String>) {
    for (key, value) in cli_args {
        match key.as_str() {
            "api.host" => config.api.host = value.clone(),
            "api.port" => {
                if let Ok(port) = value.parse::<u16>() {
                    config.api.port = port;
                }
            }
            "system.log_level" => config.system.log_level = value.clone(),
            "store.snapshot_path" => config.store.snapshot_path = Some(PathBuf::from(value)),
            _ => {}
        }
    }
}
