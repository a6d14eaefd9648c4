//! Persona - Registered individual with embedded Region
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Region - Administrative region and comuna of a Persona
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: i32,
    pub region: String,
    pub comuna: String,
}

/// Persona - Core registry record
///
/// `id` is meant to identify a Persona but uniqueness is not enforced.
/// Lookups by id act on the first match in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: i32,
    pub nombre: String,
    pub region: Region,
    pub sexo: String,
}

impl Region {
    pub fn new(id: i32, region: impl Into<String>, comuna: impl Into<String>) -> Self {
        Self {
            id,
            region: region.into(),
            comuna: comuna.into(),
        }
    }
}

impl Persona {
    pub fn new(id: i32, nombre: impl Into<String>, region: Region, sexo: impl Into<String>) -> Self {
        Self {
            id,
            nombre: nombre.into(),
            region,
            sexo: sexo.into(),
        }
    }

    /// Overwrite the mutable fields with those of `changes`.
    ///
    /// The id is kept; whatever id `changes` carries is ignored.
    pub fn apply_changes(&mut self, changes: Persona) {
        self.nombre = changes.nombre;
        self.region = changes.region;
        self.sexo = changes.sexo;
    }

    /// The five records every fresh registry starts with
    pub fn seed() -> Vec<Persona> {
        vec![
            Persona::new(
                1,
                "Giancarlos Ricci",
                Region::new(1, "Metropolitana", "Puente_Alto"),
                "hombre",
            ),
            Persona::new(
                2,
                "Luis Ricci",
                Region::new(2, "Metropolitana", "Puente_Alto"),
                "hombre",
            ),
            Persona::new(
                3,
                "Catalina",
                Region::new(3, "Valparaiso", "Quilicura"),
                "mujer",
            ),
            Persona::new(
                4,
                "Maria Lopez",
                Region::new(4, "Valparaiso", "La_Granja"),
                "mujer",
            ),
            Persona::new(
                5,
                "Javier Gomez",
                Region::new(5, "Antofagasta", "Providencia"),
                "hombre",
            ),
        ]
    }
}
