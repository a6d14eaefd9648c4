//! In-memory adapters
//!
//! Process-local storage; contents are lost on restart.

mod persona_repository;

pub use persona_repository::InMemoryPersonaRepository;
