// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Service layer error types.

Transport-agnostic errors that can be mapped to HTTP status codes by
adapters.
*/

use thiserror::Error;

/// Service layer errors (transport-agnostic)
#[derive(Error, Debug, Clone)]
pub enum ServiceError {
    /// Invalid input parameters (400 in HTTP)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal service error (500 in HTTP)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Snapshot save/load failure (500 in HTTP)
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
