//! # TaskEasy Core
//!
//! Domain layer of the TaskEasy backend: the entities, the services that
//! operate on them, the repository traits those services depend on, and
//! the error types every outer layer maps from.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Flat re-exports so callers skip the module paths
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
