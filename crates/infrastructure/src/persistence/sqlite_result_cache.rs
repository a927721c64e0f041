//! SQLite result cache implementation
//!
//! Implements the `ResultCachePort` using the pooled SQLite database. Rows
//! carry an epoch-seconds timestamp; staleness is decided at read time
//! against the caller's TTL, and stale rows are simply treated as misses
//! until the next write replaces them.

use std::sync::Arc;
use std::time::Duration;

use application::error::ApplicationError;
use application::ports::{CacheKey, CacheTable, ResultCachePort};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{OptionalExtension, params};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// SQLite-backed result cache
#[derive(Debug, Clone)]
pub struct SqliteResultCache {
    pool: Arc<ConnectionPool>,
}

impl SqliteResultCache {
    /// Create a new cache over the given pool
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

fn map_pool_error(e: r2d2::Error) -> ApplicationError {
    ApplicationError::Storage(e.to_string())
}

fn map_sqlite_error(e: rusqlite::Error) -> ApplicationError {
    ApplicationError::Storage(e.to_string())
}

#[async_trait]
impl ResultCachePort for SqliteResultCache {
    #[instrument(skip(self, ttl), fields(table = table.as_str(), key1 = key.primary(), key2 = key.secondary()))]
    async fn get_bytes(
        &self,
        table: CacheTable,
        key: &CacheKey,
        ttl: Duration,
    ) -> Result<Option<Vec<u8>>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let key = key.clone();
        // Table names come from a closed enum, never from input
        let sql = format!(
            "SELECT json, ts FROM {} WHERE key1 = ?1 AND key2 = ?2",
            table.as_str()
        );

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(map_pool_error)?;

            let row: Option<(String, i64)> = conn
                .query_row(&sql, params![key.primary(), key.secondary()], |row| {
                    Ok((row.get(0)?, row.get(1)?))
                })
                .optional()
                .map_err(map_sqlite_error)?;

            let Some((json, ts)) = row else {
                debug!("cache miss");
                return Ok(None);
            };

            // A future-dated row (clock step between writes) has negative
            // age and is served, not discarded; only rows older than the
            // TTL are treated as misses.
            let age = Utc::now().timestamp().saturating_sub(ts);
            let max_age = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
            if age > max_age {
                debug!(age_secs = age, "cache row expired");
                return Ok(None);
            }

            debug!(age_secs = age, "cache hit");
            Ok(Some(json.into_bytes()))
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self, value), fields(table = table.as_str(), key1 = key.primary(), key2 = key.secondary()))]
    async fn put_bytes(
        &self,
        table: CacheTable,
        key: &CacheKey,
        value: Vec<u8>,
    ) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let key = key.clone();
        let json = String::from_utf8(value)
            .map_err(|e| ApplicationError::Storage(format!("non-UTF-8 cache payload: {e}")))?;
        let sql = format!(
            "REPLACE INTO {} (key1, key2, json, ts) VALUES (?1, ?2, ?3, ?4)",
            table.as_str()
        );

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(map_pool_error)?;
            conn.execute(
                &sql,
                params![key.primary(), key.secondary(), json, Utc::now().timestamp()],
            )
            .map_err(map_sqlite_error)?;
            debug!("cache row stored");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}
