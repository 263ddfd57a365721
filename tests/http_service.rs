mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use orbit_visualizer::client::{
    ComputeService, HttpComputeService, RequestController, RequestState, ServiceError,
    ServiceSettings,
};
use serde_json::{Value, json};

fn settings_for(base_url: String) -> ServiceSettings {
    ServiceSettings {
        base_url,
        ..ServiceSettings::default()
    }
}

async fn settle(controller: &RequestController<HttpComputeService>) -> RequestState {
    let mut subscription = controller.subscribe();
    controller.submit(common::scenario_a_params());
    subscription.next_settled().await.expect("settled").state
}

#[tokio::test]
async fn posts_wire_parameters_and_decodes_trajectory() {
    let seen: Arc<Mutex<Option<Value>>> = Arc::default();
    let app = Router::new()
        .route(
            "/api/calculate-orbit",
            post(
                |State(seen): State<Arc<Mutex<Option<Value>>>>, Json(body): Json<Value>| async move {
                    *seen.lock().unwrap() = Some(body);
                    (
                        [("content-type", "application/json")],
                        common::SCENARIO_A_BODY,
                    )
                },
            ),
        )
        .with_state(Arc::clone(&seen));
    let base = common::spawn_service(app).await;
    let controller = RequestController::new(HttpComputeService::new(settings_for(base)).unwrap());

    match settle(&controller).await {
        RequestState::Succeeded { result } => {
            assert_eq!(*result, common::scenario_a_result());
        }
        other => panic!("expected success, got {other:?}"),
    }

    let body = seen.lock().unwrap().clone().expect("request body captured");
    assert_eq!(
        body,
        json!({
            "semi_major_axis": 7000.0,
            "eccentricity": 0.01,
            "inclination": 45.0,
            "raan": 10.0,
            "argp": 20.0,
            "true_anomaly": 0.0,
        })
    );
}

#[tokio::test]
async fn server_error_body_becomes_failure_message() {
    let app = Router::new().route(
        "/api/calculate-orbit",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "propagator diverged") }),
    );
    let base = common::spawn_service(app).await;
    let service = HttpComputeService::new(settings_for(base)).unwrap();

    let direct = service.compute(common::scenario_a_params()).await;
    assert_eq!(
        direct,
        Err(ServiceError::Application {
            status: 500,
            body: "propagator diverged".to_string(),
        })
    );

    let controller = RequestController::new(service);
    assert_eq!(
        settle(&controller).await,
        RequestState::Failed {
            message: "propagator diverged".to_string()
        }
    );
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_failure() {
    let app = Router::new().route(
        "/api/calculate-orbit",
        post(|| async { Json(json!({ "positions": [] })) }),
    );
    let base = common::spawn_service(app).await;
    let service = HttpComputeService::new(settings_for(base)).unwrap();

    let err = service
        .compute(common::scenario_a_params())
        .await
        .expect_err("missing period must fail");
    assert_eq!(err.kind(), "decode");
    assert!(err.to_string().contains("period_seconds"), "{err}");
}

#[tokio::test]
async fn unreachable_service_fails_with_transport_error() {
    let base = common::closed_port_url().await;
    let controller = RequestController::new(HttpComputeService::new(settings_for(base)).unwrap());

    match settle(&controller).await {
        RequestState::Failed { message } => assert!(!message.is_empty()),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_service_hits_client_deadline() {
    let app = Router::new().route(
        "/api/calculate-orbit",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "period_seconds": 1.0, "positions": [] }))
        }),
    );
    let base = common::spawn_service(app).await;
    let settings = ServiceSettings {
        timeout: Some(Duration::from_millis(200)),
        ..settings_for(base)
    };
    let service = HttpComputeService::new(settings).unwrap();

    let err = service
        .compute(common::scenario_a_params())
        .await
        .expect_err("deadline must fire");
    assert_eq!(err.kind(), "transport");
    assert!(err.to_string().contains("timed out"), "{err}");
}

#[tokio::test]
async fn ping_reads_health_greeting() {
    let app = Router::new().route(
        "/api/hello",
        get(|| async { Json(json!({ "message": "Hello from the orbit service" })) }),
    );
    let base = common::spawn_service(app).await;
    let service = HttpComputeService::new(settings_for(base)).unwrap();

    assert_eq!(
        service.ping().await.unwrap(),
        "Hello from the orbit service"
    );
}

#[test]
fn urls_join_base_and_paths() {
    let settings = settings_for("http://localhost:9000/".to_string());
    assert_eq!(
        settings.compute_url(),
        "http://localhost:9000/api/calculate-orbit"
    );
    assert_eq!(settings.health_url(), "http://localhost:9000/api/hello");
}
