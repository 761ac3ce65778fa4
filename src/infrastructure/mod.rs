//! Infrastructure layer - record stores behind `PageSource`

pub mod database;
pub mod storage;

pub use database::{init_database, DatabaseConfig, SeaOrmSource};
pub use storage::MemorySource;
