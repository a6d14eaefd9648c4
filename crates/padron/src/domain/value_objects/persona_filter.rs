//! PersonaFilter - Optional criteria for narrowing the registry

use crate::domain::Persona;

/// Filter criteria over Personas.
///
/// Every present criterion must hold; an absent one places no constraint.
/// Text comparisons ignore case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaFilter {
    /// Substring of `nombre`
    pub nombre: Option<String>,
    /// Exact `region.id`
    pub region_id: Option<i32>,
    /// Whole `sexo`
    pub sexo: Option<String>,
    /// Whole `region.comuna`
    pub comuna: Option<String>,
}

impl PersonaFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = Some(nombre.into());
        self
    }

    pub fn with_region_id(mut self, region_id: i32) -> Self {
        self.region_id = Some(region_id);
        self
    }

    pub fn with_sexo(mut self, sexo: impl Into<String>) -> Self {
        self.sexo = Some(sexo.into());
        self
    }

    pub fn with_comuna(mut self, comuna: impl Into<String>) -> Self {
        self.comuna = Some(comuna.into());
        self
    }

    /// True when no criterion is set, i.e. every Persona matches
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none()
            && self.region_id.is_none()
            && self.sexo.is_none()
            && self.comuna.is_none()
    }

    pub fn matches(&self, persona: &Persona) -> bool {
        let nombre_ok = self
            .nombre
            .as_deref()
            .map_or(true, |n| contains_ignore_case(&persona.nombre, n));
        let region_ok = self.region_id.map_or(true, |id| persona.region.id == id);
        let sexo_ok = self
            .sexo
            .as_deref()
            .map_or(true, |s| eq_ignore_case(&persona.sexo, s));
        let comuna_ok = self
            .comuna
            .as_deref()
            .map_or(true, |c| eq_ignore_case(&persona.region.comuna, c));

        nombre_ok && region_ok && sexo_ok && comuna_ok
    }
}

fn eq_ignore_case(value: &str, expected: &str) -> bool {
    value.to_lowercase() == expected.to_lowercase()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
