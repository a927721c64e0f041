//! Persistence layer
//!
//! SQLite-backed result cache over an r2d2 connection pool.

pub mod connection;
pub mod sqlite_result_cache;

pub use connection::{ConnectionPool, DatabaseError, PooledConn, create_pool};
pub use sqlite_result_cache::SqliteResultCache;
