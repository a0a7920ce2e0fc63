// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Evofit REST API Layer
//
// This crate provides the HTTP transport for evofit: routing, endpoint
// handlers, and the common API error/response types.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod common;
pub mod endpoints;
pub mod openapi;
pub mod transports;

// Re-export commonly used types
pub use common::{ApiError, ApiResponse, ApiState, EmptyResponse};
pub use transports::http::server::{create_http_server, serve};
