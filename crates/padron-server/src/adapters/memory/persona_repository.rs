//! In-memory implementation of PersonaRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use padron::{DomainError, Persona, PersonaFilter, PersonaRepository};

/// In-memory implementation of PersonaRepository
///
/// A single `RwLock` guards the whole list. Writers hold it across the
/// find-and-mutate step so concurrent requests never interleave.
pub struct InMemoryPersonaRepository {
    personas: RwLock<Vec<Persona>>,
}

impl InMemoryPersonaRepository {
    pub fn new(personas: Vec<Persona>) -> Self {
        Self {
            personas: RwLock::new(personas),
        }
    }

    /// Repository loaded with the seed records
    pub fn seeded() -> Self {
        Self::new(Persona::seed())
    }
}

#[async_trait]
impl PersonaRepository for InMemoryPersonaRepository {
    async fn find_all(&self) -> Result<Vec<Persona>, DomainError> {
        Ok(self.personas.read().await.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Persona>, DomainError> {
        let personas = self.personas.read().await;
        Ok(personas.iter().find(|p| p.id == id).cloned())
    }

    async fn find_matching(&self, filter: &PersonaFilter) -> Result<Vec<Persona>, DomainError> {
        let personas = self.personas.read().await;
        Ok(personas
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn insert(&self, persona: Persona) -> Result<Persona, DomainError> {
        self.personas.write().await.push(persona.clone());
        Ok(persona)
    }

    async fn update_by_id(
        &self,
        id: i32,
        changes: Persona,
    ) -> Result<Option<Persona>, DomainError> {
        let mut personas = self.personas.write().await;
        match personas.iter_mut().find(|p| p.id == id) {
            Some(persona) => {
                persona.apply_changes(changes);
                Ok(Some(persona.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<Option<Persona>, DomainError> {
        let mut personas = self.personas.write().await;
        let index = personas.iter().position(|p| p.id == id);
        Ok(index.map(|index| personas.remove(index)))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.personas.read().await.len())
    }
}
