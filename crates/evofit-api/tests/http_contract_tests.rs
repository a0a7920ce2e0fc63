use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use evofit_api::transports::http::server::{create_http_server, ApiState};
use evofit_services::{BestFitnessQuery, FitnessService, InMemoryFitnessStore};
use evofit_structures::StatCounters;

fn build_app(store: InMemoryFitnessStore) -> Router {
    create_http_server(ApiState {
        fitness_service: Arc::new(store),
        counters: Arc::new(StatCounters::new()),
        started_at_unix: 0,
    })
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn best_fitness_returns_stored_value_as_plain_text() {
    let store = InMemoryFitnessStore::new();
    let query = BestFitnessQuery::from_raw("EURUSD", 60, 2, "1 0", "0.5 0 0 0.5");
    store.store_best_fitness(&query, 0.125).await.unwrap();

    let app = build_app(store);
    let response = app
        .oneshot(form_request(
            "/v1/fitness/best_fitness",
            "symbol=EURUSD&period=60&number_of_neurons=2&flags=1%200&activities=0.5%200%200%200.5",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "0.125\n");
}

#[tokio::test]
async fn best_fitness_normalizes_sloppy_payloads_before_lookup() {
    let store = InMemoryFitnessStore::new();
    let query = BestFitnessQuery::from_raw("EURUSD", 60, 2, "1 0", "0.5 0 0 0.5");
    store.store_best_fitness(&query, 0.125).await.unwrap();

    // Short flag vector (padded) and an over-long activity list
    // (truncated) still hit the same canonical key.
    let app = build_app(store);
    let response = app
        .oneshot(form_request(
            "/v1/fitness/best_fitness",
            "symbol=EURUSD&period=60&number_of_neurons=2&flags=1&activities=0.5%200%200%200.5%2099%2099",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "0.125\n");
}

#[tokio::test]
async fn best_fitness_no_match_yields_empty_line() {
    let app = build_app(InMemoryFitnessStore::new());
    let response = app
        .oneshot(form_request(
            "/v1/fitness/best_fitness",
            "symbol=GBPUSD&period=240&number_of_neurons=1&flags=1&activities=0.5",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "\n");
}

#[tokio::test]
async fn best_fitness_missing_fields_default_to_empty_shape() {
    let store = InMemoryFitnessStore::new();
    let query = BestFitnessQuery::from_raw("", 0, 0, "", "");
    store.store_best_fitness(&query, 7.0).await.unwrap();

    let app = build_app(store);
    let response = app
        .oneshot(form_request("/v1/fitness/best_fitness", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "7\n");
}

#[tokio::test]
async fn best_fitness_rejects_negative_neuron_count() {
    let app = build_app(InMemoryFitnessStore::new());
    let response = app
        .oneshot(form_request(
            "/v1/fitness/best_fitness",
            "symbol=EURUSD&number_of_neurons=-1",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn record_then_load_roundtrip() {
    let app = build_app(InMemoryFitnessStore::new());

    let response = app
        .clone()
        .oneshot(form_request(
            "/v1/fitness/record",
            "symbol=EURUSD&period=60&number_of_neurons=2&flags=1%200&activities=0.5%200%200%200.5&fitness=0.5",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["improved"], true);

    // A worse fitness does not replace the record.
    let response = app
        .clone()
        .oneshot(form_request(
            "/v1/fitness/record",
            "symbol=EURUSD&period=60&number_of_neurons=2&flags=1%200&activities=0.5%200%200%200.5&fitness=0.75",
        ))
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["data"]["improved"], false);

    let response = app
        .oneshot(form_request(
            "/v1/fitness/best_fitness",
            "symbol=EURUSD&period=60&number_of_neurons=2&flags=1%200&activities=0.5%200%200%200.5",
        ))
        .await
        .unwrap();
    assert_eq!(body_text(response).await, "0.5\n");
}

#[tokio::test]
async fn counters_reflect_handled_requests() {
    let app = build_app(InMemoryFitnessStore::new());

    app.clone()
        .oneshot(form_request(
            "/v1/fitness/best_fitness",
            "number_of_neurons=1&flags=1&activities=0.5",
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/monitoring/counters")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["requests.fitness.best_fitness"], 1);
    // The snapshot request itself is counted before the snapshot is taken.
    assert_eq!(body["data"]["requests.monitoring.counters"], 1);
}

#[tokio::test]
async fn clearing_counters_empties_the_snapshot() {
    let app = build_app(InMemoryFitnessStore::new());

    app.clone()
        .oneshot(form_request("/v1/fitness/best_fitness", ""))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/v1/monitoring/counters")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/monitoring/counters")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["data"]["requests.monitoring.counters"], 1);
    assert!(body["data"]
        .as_object()
        .unwrap()
        .get("requests.fitness.best_fitness")
        .is_none());
}

#[tokio::test]
async fn health_check_reports_record_count() {
    let store = InMemoryFitnessStore::new();
    let query = BestFitnessQuery::from_raw("EURUSD", 60, 1, "1", "0.5");
    store.store_best_fitness(&query, 1.0).await.unwrap();

    let app = build_app(store);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/system/health_check")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["record_count"], 1);
}

#[tokio::test]
async fn unmatched_routes_are_404() {
    let app = build_app(InMemoryFitnessStore::new());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/no/such/route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
