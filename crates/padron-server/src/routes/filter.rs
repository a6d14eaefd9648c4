//! Filter Routes - Read-only queries over the registry
//!
//! Only mounted for the extended API variant. An empty result is always a
//! 404 with a text body, never an empty array.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use padron::PersonaFilter;

use super::{error_response, parse_int};
use crate::models::PersonaResponse;
use crate::AppState;

const NO_REGION_MATCH: &str = "No se encontraron personas con esa región";
const NO_SEXO_MATCH: &str = "No se encontraron personas con ese sexo";
const NO_NOMBRE_MATCH: &str = "no hay personas con ese nombre";
const NO_COMUNA_MATCH: &str = "no hay personas con esa comuna";
const NO_FILTER_MATCH: &str = "No se encontraron personas con esos fitros";

/// Query for the combined filter. Every parameter is optional.
///
/// Built from the raw pairs so a repeated key keeps its first value.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FiltrarQuery {
    /// Substring of the name, case-insensitive
    pub nombre: Option<String>,
    /// Region id; a value that is not an integer is ignored
    #[serde(rename = "regionId")]
    pub region_id: Option<String>,
    /// Sex, case-insensitive
    pub sexo: Option<String>,
}

impl FiltrarQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "nombre" => &mut query.nombre,
                "regionId" => &mut query.region_id,
                "sexo" => &mut query.sexo,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

impl From<FiltrarQuery> for PersonaFilter {
    fn from(query: FiltrarQuery) -> Self {
        PersonaFilter {
            nombre: query.nombre,
            region_id: query.region_id.as_deref().and_then(parse_int),
            sexo: query.sexo,
            comuna: None,
        }
    }
}

async fn run_filter(
    state: &AppState,
    filter: PersonaFilter,
    no_match: &'static str,
) -> Result<Json<Vec<PersonaResponse>>, (StatusCode, String)> {
    let personas = state
        .persona_service
        .filter(&filter)
        .await
        .map_err(|e| error_response(e, no_match))?;

    Ok(Json(personas.into_iter().map(Into::into).collect()))
}

/// Personas in a region
#[utoipa::path(
    get,
    path = "/personas/regiones/{regionId}",
    params(
        ("regionId" = String, Path, description = "Region ID")
    ),
    responses(
        (status = 200, description = "Personas in the region", body = Vec<PersonaResponse>),
        (status = 404, description = "No Persona in the region", body = String, content_type = "text/plain")
    ),
    tag = "Filter"
)]
pub async fn by_region(
    State(state): State<AppState>,
    Path(region_id): Path<String>,
) -> Result<Json<Vec<PersonaResponse>>, (StatusCode, String)> {
    let region_id = parse_int(&region_id)
        .ok_or_else(|| (StatusCode::NOT_FOUND, NO_REGION_MATCH.to_string()))?;

    run_filter(
        &state,
        PersonaFilter::new().with_region_id(region_id),
        NO_REGION_MATCH,
    )
    .await
}

/// Personas by sex
#[utoipa::path(
    get,
    path = "/personas/sexo/{sexo}",
    params(
        ("sexo" = String, Path, description = "Sex, case-insensitive")
    ),
    responses(
        (status = 200, description = "Matching Personas", body = Vec<PersonaResponse>),
        (status = 404, description = "No match", body = String, content_type = "text/plain")
    ),
    tag = "Filter"
)]
pub async fn by_sexo(
    State(state): State<AppState>,
    Path(sexo): Path<String>,
) -> Result<Json<Vec<PersonaResponse>>, (StatusCode, String)> {
    run_filter(&state, PersonaFilter::new().with_sexo(sexo), NO_SEXO_MATCH).await
}

/// Personas whose name contains a fragment
#[utoipa::path(
    get,
    path = "/personas/nombre/{nombre}",
    params(
        ("nombre" = String, Path, description = "Name fragment, case-insensitive")
    ),
    responses(
        (status = 200, description = "Matching Personas", body = Vec<PersonaResponse>),
        (status = 404, description = "No match", body = String, content_type = "text/plain")
    ),
    tag = "Filter"
)]
pub async fn by_nombre(
    State(state): State<AppState>,
    Path(nombre): Path<String>,
) -> Result<Json<Vec<PersonaResponse>>, (StatusCode, String)> {
    run_filter(&state, PersonaFilter::new().with_nombre(nombre), NO_NOMBRE_MATCH).await
}

/// Personas in a comuna
#[utoipa::path(
    get,
    path = "/personas/comuna/{comuna}",
    params(
        ("comuna" = String, Path, description = "Comuna, case-insensitive")
    ),
    responses(
        (status = 200, description = "Matching Personas", body = Vec<PersonaResponse>),
        (status = 404, description = "No match", body = String, content_type = "text/plain")
    ),
    tag = "Filter"
)]
pub async fn by_comuna(
    State(state): State<AppState>,
    Path(comuna): Path<String>,
) -> Result<Json<Vec<PersonaResponse>>, (StatusCode, String)> {
    run_filter(&state, PersonaFilter::new().with_comuna(comuna), NO_COMUNA_MATCH).await
}

/// Combined filter; absent parameters place no constraint
#[utoipa::path(
    get,
    path = "/personas/filtrar",
    params(FiltrarQuery),
    responses(
        (status = 200, description = "Personas matching every given parameter", body = Vec<PersonaResponse>),
        (status = 404, description = "No match", body = String, content_type = "text/plain")
    ),
    tag = "Filter"
)]
pub async fn filtrar(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<PersonaResponse>>, (StatusCode, String)> {
    let query = FiltrarQuery::from_pairs(pairs);
    run_filter(&state, query.into(), NO_FILTER_MATCH).await
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/personas/regiones/:region_id", get(by_region))
        .route("/personas/sexo/:sexo", get(by_sexo))
        .route("/personas/nombre/:nombre", get(by_nombre))
        .route("/personas/comuna/:comuna", get(by_comuna))
        .route("/personas/filtrar", get(filtrar))
}
