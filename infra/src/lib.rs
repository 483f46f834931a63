//! # TaskEasy Infrastructure
//!
//! Concrete storage behind the repository traits of `te_core`.
//!
//! Everything here is process-local: insertion-ordered `Vec`s guarded by
//! `tokio::sync::RwLock`, one per repository. Nothing survives a process
//! restart, which also resets every tracked refresh token.

pub mod memory;

pub use memory::{InMemoryRefreshTokenStore, InMemoryTodoRepository, InMemoryUserRepository};
