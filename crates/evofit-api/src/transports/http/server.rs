// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// HTTP server implementation (Axum)
//
// This module sets up the HTTP API server with Axum, including routing,
// middleware, and state management.

use axum::{
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use evofit_services::FitnessService;
use evofit_structures::StatCounters;

/// Application state shared across all HTTP handlers
#[derive(Clone)]
pub struct ApiState {
    pub fitness_service: Arc<dyn FitnessService + Send + Sync>,
    pub counters: Arc<StatCounters>,
    /// Unix timestamp of server start, for uptime reporting
    pub started_at_unix: i64,
}

/// Create the main HTTP server application
pub fn create_http_server(state: ApiState) -> Router {
    Router::new()
        // OpenAPI spec endpoint
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        // API routes: /v1/{module}/{snake_case_endpoint}
        .nest("/v1", create_v1_router())
        // Catch-all route for debugging unmatched requests
        .fallback(|| async {
            tracing::warn!(target: "evofit-api", "Unmatched request - 404 Not Found");
            (StatusCode::NOT_FOUND, "404 Not Found")
        })
        // Add state
        .with_state(state)
        // Add middleware
        .layer(create_cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::span!(
                        target: "evofit-api",
                        tracing::Level::DEBUG,
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_response(|response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::debug!(
                        target: "evofit-api",
                        "Response: status={}, latency={:?}",
                        response.status(),
                        latency
                    );
                }),
        )
}

/// Create the V1 API router
fn create_v1_router() -> Router<ApiState> {
    use crate::endpoints::{fitness, monitoring, system};

    Router::new()
        // ===== FITNESS MODULE =====
        .route("/fitness/best_fitness", post(fitness::post_best_fitness))
        .route("/fitness/record", post(fitness::post_record_fitness))
        // ===== SYSTEM MODULE =====
        .route("/system/health_check", get(system::get_health_check))
        .route("/system/version", get(system::get_version))
        // ===== MONITORING MODULE =====
        .route(
            "/monitoring/counters",
            get(monitoring::get_counters).delete(monitoring::delete_counters),
        )
}

/// Create CORS layer for the API
///
/// Trainers run on arbitrary hosts, so the API answers any origin, the
/// contract the legacy endpoint's wildcard CORS header established.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Bind and serve the HTTP API until the process is stopped
pub async fn serve(state: ApiState, host: &str, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(
        target: "evofit-api",
        "HTTP API listening on {}",
        listener.local_addr()?
    );
    axum::serve(listener, create_http_server(state)).await
}
