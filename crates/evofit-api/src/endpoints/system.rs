// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! System API Endpoints
//!
//! Health and version reporting for the evofit server.

use axum::extract::State;
use axum::response::Json;
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::{ApiResult, ApiState};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheckResponse {
    pub status: String,
    /// Number of best-fitness records currently held
    pub record_count: usize,
    pub uptime_seconds: i64,
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VersionResponse {
    pub version: String,
}

/// Get server health.
#[utoipa::path(
    get,
    path = "/v1/system/health_check",
    tag = "system",
    responses(
        (status = 200, description = "Server health", body = HealthCheckResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_health_check(
    State(state): State<ApiState>,
) -> ApiResult<Json<HealthCheckResponse>> {
    state.counters.increment("requests.system.health_check");

    let record_count = state.fitness_service.record_count().await?;

    Ok(Json(HealthCheckResponse {
        status: "healthy".to_string(),
        record_count,
        uptime_seconds: Utc::now().timestamp() - state.started_at_unix,
        version: crate::VERSION.to_string(),
    }))
}

/// Get server version.
#[utoipa::path(
    get,
    path = "/v1/system/version",
    tag = "system",
    responses(
        (status = 200, description = "Server version", body = VersionResponse)
    )
)]
pub async fn get_version(State(state): State<ApiState>) -> Json<VersionResponse> {
    state.counters.increment("requests.system.version");

    Json(VersionResponse {
        version: crate::VERSION.to_string(),
    })
}
