//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with storage. Implementations live in the server crate.

pub mod repositories;

// Re-exports
pub use repositories::*;
