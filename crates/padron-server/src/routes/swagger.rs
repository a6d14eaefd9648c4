//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa. Filter paths are only
//! published when the extended variant is served.

use utoipa::OpenApi;

use crate::config::ApiVariant;
use crate::models::{PersonaRequest, PersonaResponse, RegionBody};

use super::health::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::health_check,
        // Persona endpoints
        super::persona::list_personas,
        super::persona::create_persona,
        super::persona::get_persona,
        super::persona::update_persona,
        super::persona::delete_persona,
    ),
    info(
        title = "Padron API",
        version = "0.1.0",
        description = "In-memory registry of Personas and their Region.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Persona", description = "Persona registry CRUD"),
        (name = "Filter", description = "Read-only Persona filters"),
    ),
    components(
        schemas(
            HealthCheck,
            RegionBody,
            PersonaRequest,
            PersonaResponse,
        )
    ),
)]
pub struct ApiDoc;

#[derive(OpenApi)]
#[openapi(paths(
    super::filter::by_region,
    super::filter::by_sexo,
    super::filter::by_nombre,
    super::filter::by_comuna,
    super::filter::filtrar,
))]
pub struct FilterApiDoc;

/// OpenAPI document matching the routes mounted for `variant`
pub fn api_doc(variant: ApiVariant) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if variant.has_filters() {
        doc.merge(FilterApiDoc::openapi());
    }
    doc
}
