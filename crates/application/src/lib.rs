//! Application layer - Use cases and orchestration
//!
//! Holds the route display coordinator and the ports it drives. Adapters in
//! the infrastructure layer implement the ports; the presentation layer owns
//! the coordinator.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
