//! Padron Domain Library
//!
//! Core domain types and interfaces for the persona registry.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Persona, Region)
//!   - `value_objects/`: Immutable value types (PersonaFilter)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use padron::{Persona, PersonaFilter, PersonaRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, Persona, PersonaFilter, Region};
pub use ports::PersonaRepository;
