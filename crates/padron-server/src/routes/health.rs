//! Health check

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    message: String,
    version: String,
    variant: String,
    personas: usize,
}

/// Service liveness and registry size
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthCheck)
    ),
    tag = "Health"
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthCheck>, (StatusCode, String)> {
    let personas = state
        .persona_service
        .count()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(HealthCheck {
        status: "ok".to_string(),
        message: "Padron API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        variant: state.variant.to_string(),
        personas,
    }))
}
