//! Domain Entities
//!
//! - Persona: a registered individual
//! - Region: administrative region and comuna, embedded in a Persona

mod persona;

pub use persona::*;
