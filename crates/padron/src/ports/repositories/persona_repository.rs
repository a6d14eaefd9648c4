//! Persona Repository Port
//!
//! Abstract interface for Persona storage operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Persona, PersonaFilter};

/// Repository interface for Persona entities
///
/// Records keep insertion order. Id-based operations act on the first
/// record carrying that id.
#[async_trait]
pub trait PersonaRepository: Send + Sync {
    /// All Personas in insertion order
    async fn find_all(&self) -> Result<Vec<Persona>, DomainError>;

    /// First Persona with the given id
    async fn find_by_id(&self, id: i32) -> Result<Option<Persona>, DomainError>;

    /// Personas matching the filter, insertion order kept
    async fn find_matching(&self, filter: &PersonaFilter) -> Result<Vec<Persona>, DomainError>;

    /// Append a Persona; ids are not checked for uniqueness
    async fn insert(&self, persona: Persona) -> Result<Persona, DomainError>;

    /// Overwrite nombre, region and sexo of the first match.
    /// Returns the updated record, or None when the id is unknown.
    async fn update_by_id(&self, id: i32, changes: Persona)
        -> Result<Option<Persona>, DomainError>;

    /// Remove the first match. Returns the removed record.
    async fn delete_by_id(&self, id: i32) -> Result<Option<Persona>, DomainError>;

    /// Number of stored Personas
    async fn count(&self) -> Result<usize, DomainError>;
}
