//! # Evofit - Best-Fitness Lookup Service
//!
//! Evofit is the scoreboard of an evolutionary training farm: trainers
//! submit the best fitness found for a given network shape (symbol,
//! period, neuron count, flag vector, activity matrix) and query it back
//! by exact match. This umbrella crate re-exports all workspace
//! components; the `evofit-server` binary runs the HTTP service.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! evofit = "0.1"
//! ```
//!
//! ```rust
//! use evofit::structures::{normalize_activities, normalize_flags};
//!
//! // Raw trainer payloads canonicalize to a fixed shape.
//! assert_eq!(normalize_flags("1 junk -5", 3), "1 0 -5");
//! assert_eq!(normalize_activities("0.5 0 0", 2), "0.5 0\n0 0");
//! ```
//!
//! ## Components
//!
//! - [`structures`] - payload canonicalization and statistics counters
//! - [`services`] - the transport-agnostic service layer and the
//!   in-memory fitness store
//! - [`api`] - the Axum HTTP transport
//! - [`config`] - TOML configuration with environment overrides
//! - [`observability`] - logging initialization

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use evofit_api as api;
pub use evofit_config as config;
pub use evofit_observability as observability;
pub use evofit_services as services;
pub use evofit_structures as structures;
