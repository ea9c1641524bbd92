use axum::{
    Router,
    body::{Body, Bytes, to_bytes},
    http::{Method, Request, StatusCode},
};
use thiserror::Error;
use tower::ServiceExt;
use tracing::{debug, info};

pub const ROOT_PATH: &str = "/";
pub const GREETING: &str = "Hello from CI/CD Pipeline!";
pub const EXPECTED_STATUS: StatusCode = StatusCode::OK;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionFailure {
    #[error("expected status {expected}, got {actual}")]
    Status {
        expected: StatusCode,
        actual: StatusCode,
    },
    #[error("response body does not contain {expected:?}")]
    BodyMissing { expected: &'static str },
}

#[derive(Debug, Error)]
pub enum SmokeError {
    #[error("assertion failed: {0}")]
    Assertion(#[from] AssertionFailure),
    #[error("dispatch failed: {0}")]
    Dispatch(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResponse {
    status: StatusCode,
    body: Bytes,
}

impl TestResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    #[must_use]
    pub fn body_contains(&self, needle: &[u8]) -> bool {
        needle.is_empty() || self.body.windows(needle.len()).any(|window| window == needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmokeReport {
    pub status: StatusCode,
    pub body_len: usize,
}

#[derive(Clone)]
pub struct TestClient {
    router: Router,
}

impl TestClient {
    #[must_use]
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub async fn get(&self, path: &str) -> Result<TestResponse, SmokeError> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .map_err(|error| SmokeError::Dispatch(format!("invalid request: {error}")))?;

        let response = match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|error| SmokeError::Dispatch(format!("failed to read body: {error}")))?;

        debug!(%status, body_len = body.len(), "test client received response");
        Ok(TestResponse::new(status, body))
    }
}

// Status before body; only the first violation is reported.
pub fn assert_response(response: &TestResponse) -> Result<(), AssertionFailure> {
    if response.status() != EXPECTED_STATUS {
        return Err(AssertionFailure::Status {
            expected: EXPECTED_STATUS,
            actual: response.status(),
        });
    }

    if !response.body_contains(GREETING.as_bytes()) {
        return Err(AssertionFailure::BodyMissing { expected: GREETING });
    }

    Ok(())
}

pub async fn run(router: Router) -> Result<SmokeReport, SmokeError> {
    let client = TestClient::new(router);
    let response = client.get(ROOT_PATH).await?;
    assert_response(&response)?;

    info!(
        "smoke check passed path={} status={}",
        ROOT_PATH,
        response.status()
    );

    Ok(SmokeReport {
        status: response.status(),
        body_len: response.body().len(),
    })
}
