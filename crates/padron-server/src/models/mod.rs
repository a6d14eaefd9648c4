//! Padron Data Models
//!
//! Request/response DTOs for the HTTP API.
//! - Persona: registry record
//! - Region: region and comuna embedded in a Persona

mod persona;

pub use persona::*;
