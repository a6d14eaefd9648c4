//! Persona Application Service (Use Case)
//!
//! Orchestrates domain operations for Persona management.

use std::sync::Arc;

use padron::{DomainError, Persona, PersonaFilter, PersonaRepository};

/// Application service for Persona operations
pub struct PersonaService<R: PersonaRepository> {
    repo: Arc<R>,
}

impl<R: PersonaRepository> PersonaService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Personas in insertion order
    pub async fn list_all(&self) -> Result<Vec<Persona>, DomainError> {
        self.repo.find_all().await
    }

    /// Get the first Persona with the given id
    pub async fn get_by_id(&self, id: i32) -> Result<Persona, DomainError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!("Persona {} not found", id);
            DomainError::not_found("Persona", id)
        })
    }

    /// Append a Persona as given, including its id
    pub async fn create(&self, persona: Persona) -> Result<Persona, DomainError> {
        let saved = self.repo.insert(persona).await?;

        tracing::info!("Created Persona: {} ({})", saved.nombre, saved.id);

        Ok(saved)
    }

    /// Replace nombre, region and sexo of the first Persona with `id`
    pub async fn update(&self, id: i32, changes: Persona) -> Result<Persona, DomainError> {
        let updated = self
            .repo
            .update_by_id(id, changes)
            .await?
            .ok_or_else(|| DomainError::not_found("Persona", id))?;

        tracing::info!("Updated Persona: {} ({})", updated.nombre, updated.id);

        Ok(updated)
    }

    /// Remove the first Persona with `id`
    pub async fn delete(&self, id: i32) -> Result<Persona, DomainError> {
        let removed = self
            .repo
            .delete_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Persona", id))?;

        tracing::info!("Deleted Persona: {} ({})", removed.nombre, removed.id);

        Ok(removed)
    }

    /// Personas matching every criterion of the filter.
    ///
    /// An empty result is an error, never an empty list.
    pub async fn filter(&self, filter: &PersonaFilter) -> Result<Vec<Persona>, DomainError> {
        let matches = self.repo.find_matching(filter).await?;
        if matches.is_empty() {
            tracing::debug!("No Persona matched {:?}", filter);
            return Err(DomainError::no_matches("Persona"));
        }
        Ok(matches)
    }

    /// Number of stored Personas
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repo.count().await
    }
}
