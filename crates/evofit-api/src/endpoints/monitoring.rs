// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Monitoring API Endpoints
//!
//! Exposes the process-wide request counters.

use axum::extract::State;
use axum::response::Json;
use std::collections::BTreeMap;

use crate::common::{ApiResponse, ApiState, EmptyResponse};

/// Get a snapshot of all request counters.
#[utoipa::path(
    get,
    path = "/v1/monitoring/counters",
    tag = "monitoring",
    responses(
        (status = 200, description = "Counter snapshot, keyed by counter name")
    )
)]
pub async fn get_counters(
    State(state): State<ApiState>,
) -> Json<ApiResponse<BTreeMap<String, i64>>> {
    state.counters.increment("requests.monitoring.counters");

    Json(ApiResponse::success(state.counters.snapshot()))
}

/// Clear all request counters.
#[utoipa::path(
    delete,
    path = "/v1/monitoring/counters",
    tag = "monitoring",
    responses(
        (status = 200, description = "Counters cleared")
    )
)]
pub async fn delete_counters(State(state): State<ApiState>) -> Json<ApiResponse<EmptyResponse>> {
    state.counters.clear();

    Json(ApiResponse::success(EmptyResponse::new()))
}
