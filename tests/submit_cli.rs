mod common;

use assert_cmd::Command;
use assert_cmd::assert::{Assert, OutputAssertExt};
use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use predicates::prelude::*;

/// Run the binary off the runtime so the in-process service keeps answering.
async fn run_submit(args: Vec<String>) -> Assert {
    let output = tokio::task::spawn_blocking(move || {
        Command::cargo_bin("orbit_submit")
            .expect("orbit_submit bin")
            .args(&args)
            .output()
            .expect("run orbit_submit")
    })
    .await
    .expect("orbit_submit task");
    output.assert()
}

#[tokio::test(flavor = "multi_thread")]
async fn orbit_submit_reports_success_and_writes_csv() {
    let app = Router::new().route(
        "/api/calculate-orbit",
        post(|| async {
            (
                [("content-type", "application/json")],
                common::SCENARIO_A_BODY,
            )
        }),
    );
    let base = common::spawn_service(app).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = dir.path().join("orbit.csv");

    run_submit(vec![
        "--url".into(),
        base,
        "--set".into(),
        "inclination=51.6".into(),
        "--csv-out".into(),
        csv.to_str().unwrap().into(),
    ])
    .await
    .success()
    .stdout(predicate::str::contains("inclination = 51.6"))
    .stdout(predicate::str::contains("Calculation Status: Calculating..."))
    .stdout(predicate::str::contains("Calculation Status: Success!"))
    .stdout(predicate::str::contains("Received 2 position points."));

    assert!(csv.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn orbit_submit_exits_nonzero_when_artifact_cannot_be_written() {
    let app = Router::new().route(
        "/api/calculate-orbit",
        post(|| async {
            (
                [("content-type", "application/json")],
                common::SCENARIO_A_BODY,
            )
        }),
    );
    let base = common::spawn_service(app).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").expect("write blocker");
    let csv = blocker.join("orbit.csv");

    run_submit(vec![
        "--url".into(),
        base,
        "--csv-out".into(),
        csv.to_str().unwrap().into(),
    ])
    .await
    .failure()
    .stdout(predicate::str::contains("Calculation Status: Success!"))
    .stdout(predicate::str::contains("export failed:"));
}

#[tokio::test(flavor = "multi_thread")]
async fn orbit_submit_exits_nonzero_on_service_error() {
    let app = Router::new().route(
        "/api/calculate-orbit",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "propagator diverged") }),
    );
    let base = common::spawn_service(app).await;

    run_submit(vec!["--url".into(), base])
        .await
        .failure()
        .stdout(predicate::str::contains("Calculation Status: Failed!"))
        .stdout(predicate::str::contains("  propagator diverged"));
}

#[tokio::test(flavor = "multi_thread")]
async fn orbit_submit_rejects_out_of_range_override_before_sending() {
    let base = common::closed_port_url().await;

    run_submit(vec!["--url".into(), base, "--set".into(), "eccentricity=1.5".into()])
        .await
        .failure()
        .stderr(predicate::str::contains("eccentricity=1.5"))
        .stdout(predicate::str::contains("submitted request").not());
}
