//! Business entities and their invariants.

pub mod entities;

pub use entities::*;
