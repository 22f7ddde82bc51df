//! Domain layer for route display
//!
//! Contains the route model, ambient-condition snapshots, display formatting
//! rules and domain errors. This layer does no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
