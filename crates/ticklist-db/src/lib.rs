pub mod config;
pub mod database;
pub mod todo_repository;
pub mod user_repository;

pub use config::DatabaseConfig;
pub use database::Database;
pub use todo_repository::TodoRepository;
pub use user_repository::UserRepository;
