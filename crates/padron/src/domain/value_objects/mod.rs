//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod persona_filter;

pub use persona_filter::*;
