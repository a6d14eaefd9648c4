//! Persona Routes - Registry CRUD
//!
//! HTTP handlers that delegate to PersonaService for business logic.
//! Ids that do not parse as integers are treated as unknown ids.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::{error_response, parse_int};
use crate::models::{PersonaRequest, PersonaResponse};
use crate::AppState;

/// List all Personas
#[utoipa::path(
    get,
    path = "/personas",
    responses(
        (status = 200, description = "All Personas in insertion order", body = Vec<PersonaResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Persona"
)]
pub async fn list_personas(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonaResponse>>, (StatusCode, String)> {
    let personas = state
        .persona_service
        .list_all()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(personas.into_iter().map(Into::into).collect()))
}

/// Get Persona by ID
#[utoipa::path(
    get,
    path = "/personas/{id}",
    params(
        ("id" = String, Path, description = "Persona ID")
    ),
    responses(
        (status = 200, description = "Persona found", body = PersonaResponse),
        (status = 404, description = "Persona not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Persona"
)]
pub async fn get_persona(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PersonaResponse>, (StatusCode, String)> {
    let not_found = state.variant.get_not_found();
    let id = parse_int(&id)
        .ok_or_else(|| (StatusCode::NOT_FOUND, not_found.to_string()))?;

    let persona = state
        .persona_service
        .get_by_id(id)
        .await
        .map_err(|e| error_response(e, not_found))?;

    Ok(Json(persona.into()))
}

/// Create new Persona
///
/// The client supplies the id; duplicates are accepted.
#[utoipa::path(
    post,
    path = "/personas",
    request_body = PersonaRequest,
    responses(
        (status = 201, description = "Persona created", body = String, content_type = "text/plain"),
        (status = 422, description = "Body is not a Persona"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Persona"
)]
pub async fn create_persona(
    State(state): State<AppState>,
    Json(payload): Json<PersonaRequest>,
) -> Result<(StatusCode, &'static str), (StatusCode, String)> {
    state
        .persona_service
        .create(payload.into())
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((StatusCode::CREATED, state.variant.created()))
}

/// Update Persona
#[utoipa::path(
    put,
    path = "/personas/{id}",
    params(
        ("id" = String, Path, description = "Persona ID")
    ),
    request_body = PersonaRequest,
    responses(
        (status = 200, description = "Persona updated", body = String, content_type = "text/plain"),
        (status = 404, description = "Persona not found", body = String, content_type = "text/plain"),
        (status = 422, description = "Persona found but body is not a Persona"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Persona"
)]
pub async fn update_persona(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PersonaRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), (StatusCode, String)> {
    let not_found = state.variant.mutation_not_found();
    let id = parse_int(&id)
        .ok_or_else(|| (StatusCode::NOT_FOUND, not_found.to_string()))?;

    // The id is resolved before the body; a bad body only matters for a known id
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            state
                .persona_service
                .get_by_id(id)
                .await
                .map_err(|e| error_response(e, not_found))?;
            return Err((rejection.status(), rejection.body_text()));
        }
    };

    state
        .persona_service
        .update(id, payload.into())
        .await
        .map_err(|e| error_response(e, not_found))?;

    Ok((StatusCode::OK, state.variant.updated()))
}

/// Delete Persona
#[utoipa::path(
    delete,
    path = "/personas/{id}",
    params(
        ("id" = String, Path, description = "Persona ID")
    ),
    responses(
        (status = 204, description = "Persona deleted"),
        (status = 404, description = "Persona not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Persona"
)]
pub async fn delete_persona(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let not_found = state.variant.mutation_not_found();
    let id = parse_int(&id)
        .ok_or_else(|| (StatusCode::NOT_FOUND, not_found.to_string()))?;

    state
        .persona_service
        .delete(id)
        .await
        .map_err(|e| error_response(e, not_found))?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/personas", get(list_personas).post(create_persona))
        .route(
            "/personas/:id",
            get(get_persona).put(update_persona).delete(delete_persona),
        )
}
