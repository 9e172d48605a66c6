//! Route handlers for the natprove server.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use natprove_api::{ProofRequest, ProofResponse};
use natprove_core::{CoreError, MachineRegistry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared application state: the registry of proof machines.
pub struct AppState {
    pub registry: MachineRegistry,
}

impl AppState {
    pub fn new(registry: MachineRegistry) -> Self {
        AppState { registry }
    }
}

/// Error body returned alongside non-2xx statuses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Health status response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status, "healthy" while serving
    pub status: String,
    /// Whether the server is ready to accept requests
    pub ready: bool,
}

/// API version and metadata response
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse {
    /// Package name
    pub name: String,
    /// Package version
    pub version: String,
    /// API version for compatibility checking
    pub api_version: String,
}

impl VersionResponse {
    /// Create version response with current build info
    pub fn current() -> Self {
        VersionResponse {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            api_version: "v1".to_string(),
        }
    }
}

/// Build the application router over `state`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/proof_request", post(proof_request))
        .with_state(state)
}

/// GET /health - liveness and readiness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        ready: true,
    })
}

/// GET /version - API version and metadata
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse::current())
}

/// POST /proof_request - answer a proof request
///
/// Routes the request to the machine named by its `machinePointer`. The
/// proof search itself is synchronous and completes within this call.
pub async fn proof_request(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProofRequest>,
) -> Result<Json<ProofResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.registry.dispatch(&request) {
        Ok(response) => Ok(Json(response)),
        Err(err @ CoreError::UnknownMachine { .. }) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "unknown machine".to_string(),
                details: Some(err.to_string()),
            }),
        )),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "proof machine failure".to_string(),
                details: Some(err.to_string()),
            }),
        )),
    }
}
