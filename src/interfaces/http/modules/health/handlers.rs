//! Health check handler

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::interfaces::http::modules::AppState;

/// Service health response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub catalog: ComponentHealth,
}

/// Component health status
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    pub status: String,
    pub brand_count: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is degraded", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let uptime = state.started_at.elapsed().as_secs();

    // Probe the catalog through the read lock.
    let (status, catalog) = match state.service.list_brands() {
        Ok(brands) => (
            StatusCode::OK,
            ComponentHealth {
                status: "up".to_string(),
                brand_count: Some(brands.len()),
            },
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            ComponentHealth {
                status: e.to_string(),
                brand_count: None,
            },
        ),
    };

    let body = HealthResponse {
        status: if status == StatusCode::OK { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
        catalog,
    };

    (status, Json(body))
}
