use axum::{Router, http::StatusCode, routing::get};
use clap::Parser;
use hello_pipeline::{
    application::{config::Args, startup},
    domain::error::DomainError,
    smoke::{self, AssertionFailure, GREETING, ROOT_PATH, SmokeError, TestClient},
};

use super::support::{app_router, test_config};

fn assertion_failure(error: SmokeError) -> AssertionFailure {
    match error {
        SmokeError::Assertion(failure) => failure,
        SmokeError::Dispatch(message) => {
            panic!("expected assertion failure, got dispatch: {message}")
        }
    }
}

fn stub_router(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(ROOT_PATH, get(move || async move { (status, body) }))
}

#[tokio::test]
async fn root_returns_greeting() {
    let client = TestClient::new(app_router());

    let response = client.get("/").await.expect("root should dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.body_contains(b"Hello from CI/CD Pipeline!"));
}

#[test]
fn harness_expects_the_published_greeting() {
    assert_eq!(GREETING, "Hello from CI/CD Pipeline!");
    assert_eq!(ROOT_PATH, "/");
}

#[tokio::test]
async fn runner_passes_against_application() {
    let report = smoke::run(app_router())
        .await
        .expect("smoke check should pass");

    assert_eq!(report.status, StatusCode::OK);
    assert_eq!(report.body_len, GREETING.len());
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let client = TestClient::new(app_router());

    let first = client.get(ROOT_PATH).await.expect("first request");
    let second = client.get(ROOT_PATH).await.expect("second request");

    assert_eq!(first, second);
}

#[tokio::test]
async fn runner_reports_status_mismatch() {
    let error = smoke::run(stub_router(StatusCode::NOT_FOUND, GREETING))
        .await
        .expect_err("404 should fail the status assertion");

    assert_eq!(
        assertion_failure(error),
        AssertionFailure::Status {
            expected: StatusCode::OK,
            actual: StatusCode::NOT_FOUND,
        }
    );
}

#[tokio::test]
async fn runner_reports_missing_greeting() {
    let error = smoke::run(stub_router(StatusCode::OK, "Goodbye"))
        .await
        .expect_err("Goodbye should fail the body assertion");

    assert_eq!(
        assertion_failure(error),
        AssertionFailure::BodyMissing { expected: GREETING }
    );
}

#[tokio::test]
async fn runner_stops_at_first_failed_assertion() {
    let error = smoke::run(stub_router(StatusCode::NOT_FOUND, "Goodbye"))
        .await
        .expect_err("stub should fail");

    assert!(matches!(
        error,
        SmokeError::Assertion(AssertionFailure::Status { .. })
    ));
}

#[tokio::test]
async fn runner_fails_when_root_is_not_routed() {
    let router = Router::new().route("/other", get(|| async { GREETING }));

    let error = smoke::run(router).await.expect_err("unrouted root should fail");

    assert_eq!(
        assertion_failure(error),
        AssertionFailure::Status {
            expected: StatusCode::OK,
            actual: StatusCode::NOT_FOUND,
        }
    );
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let client = TestClient::new(app_router());

    let response = client.get("/missing").await.expect("request should dispatch");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_path_is_a_dispatch_error() {
    let client = TestClient::new(app_router());

    let error = client
        .get("not a uri")
        .await
        .expect_err("request should not build");

    assert!(matches!(error, SmokeError::Dispatch(_)));
}

#[tokio::test]
async fn startup_smoke_check_maps_into_domain_result() {
    let report = startup::smoke_check(test_config())
        .await
        .expect("startup smoke check should pass");
    assert_eq!(report.status, StatusCode::OK);

    let failure = DomainError::from(SmokeError::from(AssertionFailure::BodyMissing {
        expected: GREETING,
    }));
    assert!(matches!(failure, DomainError::SmokeFailed(_)));
}

#[tokio::test]
async fn smoke_check_flag_runs_without_binding() {
    let args = Args::try_parse_from(["hello-pipeline", "--smoke-check", "--log-filter", "warn"])
        .expect("args should parse");

    let result = startup::run(args).await;

    assert!(result.is_ok(), "smoke check run failed: {result:?}");
}
