//! Persona request/response bodies

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use padron::{Persona, Region};

/// Region embedded in a Persona
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegionBody {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Metropolitana")]
    pub region: String,
    #[schema(example = "Puente_Alto")]
    pub comuna: String,
}

// ============================================
// Request/Response DTOs
// ============================================

/// Create or update Persona request.
///
/// All fields are required. On update the `id` is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PersonaRequest {
    #[schema(example = 6)]
    pub id: i32,
    #[schema(example = "Rosa Diaz")]
    pub nombre: String,
    pub region: RegionBody,
    #[schema(example = "mujer")]
    pub sexo: String,
}

/// Persona response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PersonaResponse {
    pub id: i32,
    pub nombre: String,
    pub region: RegionBody,
    pub sexo: String,
}

impl From<RegionBody> for Region {
    fn from(body: RegionBody) -> Self {
        Region::new(body.id, body.region, body.comuna)
    }
}

impl From<Region> for RegionBody {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            region: region.region,
            comuna: region.comuna,
        }
    }
}

impl From<PersonaRequest> for Persona {
    fn from(req: PersonaRequest) -> Self {
        Persona::new(req.id, req.nombre, req.region.into(), req.sexo)
    }
}

impl From<Persona> for PersonaResponse {
    fn from(persona: Persona) -> Self {
        Self {
            id: persona.id,
            nombre: persona.nombre,
            region: persona.region.into(),
            sexo: persona.sexo,
        }
    }
}
