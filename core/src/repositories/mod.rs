pub mod refresh_token_store;
pub mod todo_repository;
pub mod user_repository;

pub use refresh_token_store::RefreshTokenStore;
pub use todo_repository::TodoRepository;
pub use user_repository::UserRepository;
