use std::future::Future;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::{application::state::SharedState, domain::error::DomainError};

const ROOT_GREETING: &str = "Hello from CI/CD Pipeline!";

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .with_state(state)
}

pub async fn serve(
    listener: TcpListener,
    state: SharedState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), DomainError> {
    let local_addr = listener.local_addr().map_err(|error| {
        DomainError::Unavailable(format!("failed to read listener address: {error}"))
    })?;

    info!(
        "hello-pipeline listening on http://{}:{}, version={}",
        local_addr.ip(),
        local_addr.port(),
        state.config().runtime_version,
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|error| DomainError::Unavailable(format!("server runtime error: {error}")))
}

async fn root_handler(State(state): State<SharedState>) -> impl IntoResponse {
    debug!(uptime_ms = state.uptime_ms(), "serving root greeting");
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        ROOT_GREETING,
    )
}
