// Service exports
pub mod cache;
pub mod postgres;

pub use cache::{CacheKey, ReferenceCache};
pub use postgres::{escape_like, PostgresClient, PostgresError};
