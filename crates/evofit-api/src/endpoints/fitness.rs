// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Fitness API

Endpoints for looking up and recording the best known fitness of a
trained network shape. The lookup endpoint speaks plain text: trainers
are thin clients that POST urlencoded forms and parse a single scalar
back.
*/

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::{ApiResponse, ApiResult, ApiState};
use evofit_services::BestFitnessQuery;

/// Identifying parameters of a trained network shape.
///
/// Every field is optional on the wire; absent fields take the type's
/// empty/zero default. `flags` and `activities` arrive as raw
/// whitespace-delimited text and are canonicalized against
/// `number_of_neurons` before any lookup.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct BestFitnessRequest {
    pub symbol: String,
    pub period: i64,
    #[validate(range(min = 0))]
    pub number_of_neurons: i64,
    pub flags: String,
    pub activities: String,
}

/// `BestFitnessRequest` plus the fitness value to record.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct RecordFitnessRequest {
    pub symbol: String,
    pub period: i64,
    #[validate(range(min = 0))]
    pub number_of_neurons: i64,
    pub flags: String,
    pub activities: String,
    pub fitness: f64,
}

/// Outcome of a fitness recording
#[derive(Debug, Serialize, ToSchema)]
pub struct RecordFitnessResult {
    /// Whether the submitted fitness became the new best for this shape
    pub improved: bool,
    /// The submitted fitness value
    pub fitness: f64,
}

/// Look up the best known fitness for a network shape.
///
/// Responds with the scalar fitness as `text/plain` followed by a single
/// newline, or a bare newline when no record matches.
#[utoipa::path(
    post,
    path = "/v1/fitness/best_fitness",
    tag = "fitness",
    request_body(
        content = BestFitnessRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Best fitness as plain text, empty line when no record matches", body = String, content_type = "text/plain"),
        (status = 400, description = "Negative neuron count"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn post_best_fitness(
    State(state): State<ApiState>,
    Form(request): Form<BestFitnessRequest>,
) -> ApiResult<Response> {
    state.counters.increment("requests.fitness.best_fitness");
    request.validate()?;

    let n = request.number_of_neurons as usize;
    let query = BestFitnessQuery::from_raw(
        trim_line_endings(&request.symbol),
        request.period,
        n,
        &request.flags,
        &request.activities,
    );

    let fitness = state.fitness_service.load_best_fitness(&query).await?;

    let body = match fitness {
        Some(value) => format!("{}\n", value),
        None => "\n".to_string(),
    };
    Ok((StatusCode::OK, body).into_response())
}

/// Record a fitness value for a network shape.
///
/// The payloads are canonicalized exactly as for the lookup, so a record
/// written here is found by the same shape later regardless of input
/// formatting.
#[utoipa::path(
    post,
    path = "/v1/fitness/record",
    tag = "fitness",
    request_body(
        content = RecordFitnessRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Recording outcome", body = RecordFitnessResult),
        (status = 400, description = "Negative neuron count or non-numeric fitness"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn post_record_fitness(
    State(state): State<ApiState>,
    Form(request): Form<RecordFitnessRequest>,
) -> ApiResult<Json<ApiResponse<RecordFitnessResult>>> {
    state.counters.increment("requests.fitness.record");
    request.validate()?;

    let n = request.number_of_neurons as usize;
    let query = BestFitnessQuery::from_raw(
        trim_line_endings(&request.symbol),
        request.period,
        n,
        &request.flags,
        &request.activities,
    );

    let improved = state
        .fitness_service
        .store_best_fitness(&query, request.fitness)
        .await?;

    Ok(Json(ApiResponse::success(RecordFitnessResult {
        improved,
        fitness: request.fitness,
    })))
}

/// Strip CR/LF noise from the edges of a form field.
fn trim_line_endings(raw: &str) -> &str {
    raw.trim_matches(['\r', '\n'])
}
