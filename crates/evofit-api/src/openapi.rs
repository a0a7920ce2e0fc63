// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! OpenAPI documentation (compile-time, served at `/api-docs/openapi.json`)

use utoipa::OpenApi;

use crate::endpoints::{fitness, monitoring, system};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Evofit API",
        description = "Best-fitness lookup service for evolutionarily trained market predictors"
    ),
    paths(
        fitness::post_best_fitness,
        fitness::post_record_fitness,
        system::get_health_check,
        system::get_version,
        monitoring::get_counters,
        monitoring::delete_counters,
    ),
    components(schemas(
        fitness::BestFitnessRequest,
        fitness::RecordFitnessRequest,
        fitness::RecordFitnessResult,
        system::HealthCheckResponse,
        system::VersionResponse,
        crate::common::ApiError,
    )),
    tags(
        (name = "fitness", description = "Best-fitness lookup and recording"),
        (name = "system", description = "Health and version"),
        (name = "monitoring", description = "Request statistics")
    )
)]
pub struct ApiDoc;
