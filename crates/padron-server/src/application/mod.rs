//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations over the repositories.

mod persona_service;

pub use persona_service::PersonaService;
