//! In-memory storage implementations
//!
//! One module per repository trait from `te_core`. Each keeps its records
//! in an insertion-ordered `Vec` behind a `tokio::sync::RwLock`.

mod refresh_token_store_impl;
mod todo_repository_impl;
mod user_repository_impl;

pub use refresh_token_store_impl::InMemoryRefreshTokenStore;
pub use todo_repository_impl::InMemoryTodoRepository;
pub use user_repository_impl::InMemoryUserRepository;
