// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Common types used across all endpoints

pub mod error;
pub mod response;

pub use error::{ApiError, ApiErrorCode};
pub use response::{ApiResponse, EmptyResponse};

pub use crate::transports::http::server::ApiState;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
