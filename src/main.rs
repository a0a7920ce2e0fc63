// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Evofit server binary
//!
//! Boots the HTTP API: configuration, logging, fitness store (with an
//! optional snapshot loaded from disk), then the Axum server.

use std::sync::Arc;

use anyhow::Context;
use evofit_api::ApiState;
use evofit_config::{load_config, validate_config, ConfigError, EvofitConfig};
use evofit_services::InMemoryFitnessStore;
use evofit_structures::StatCounters;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing config file is not fatal; the defaults boot a local server.
    let (config, config_found) = match load_config(None, None) {
        Ok(config) => (config, true),
        Err(ConfigError::FileNotFound(_)) => (EvofitConfig::default(), false),
        Err(err) => return Err(err).context("failed to load configuration"),
    };
    validate_config(&config).context("invalid configuration")?;

    evofit_observability::init_logging(&config.system.log_level)?;
    if !config_found {
        tracing::warn!(target: "evofit", "No configuration file found, using defaults");
    }

    let store = match &config.store.snapshot_path {
        Some(path) if path.exists() => {
            let store = InMemoryFitnessStore::load_from_file(path).with_context(|| {
                format!("failed to load store snapshot from {}", path.display())
            })?;
            tracing::info!(target: "evofit", "Loaded store snapshot from {}", path.display());
            store
        }
        Some(path) => {
            tracing::warn!(
                target: "evofit",
                "Store snapshot {} does not exist yet, starting empty",
                path.display()
            );
            InMemoryFitnessStore::new()
        }
        None => InMemoryFitnessStore::new(),
    };

    let state = ApiState {
        fitness_service: Arc::new(store),
        counters: Arc::new(StatCounters::new()),
        started_at_unix: chrono::Utc::now().timestamp(),
    };

    evofit_api::serve(state, &config.api.host, config.api.port)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
