//! Result-cache port definition
//!
//! A composite-keyed, TTL-on-read key/value store. Values are stored as raw
//! bytes; callers use the typed extension trait for serde round-trips. The
//! store never evicts proactively: a row older than the caller's TTL is
//! simply reported as absent.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Logical tables of the result cache, one per cached data category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheTable {
    /// Summarized course reviews, keyed (course, professor)
    CourseReviews,
    /// Aggregated course grade distributions, keyed (course, professor-or-empty)
    CourseGrades,
    /// Professor ratings and optional review summaries, keyed (professor, shape)
    ProfessorRatings,
    /// Aggregated professor grade distributions, keyed (professor, empty)
    ProfessorGrades,
}

impl CacheTable {
    /// All tables, in schema order
    pub const ALL: [Self; 4] = [
        Self::CourseReviews,
        Self::CourseGrades,
        Self::ProfessorRatings,
        Self::ProfessorGrades,
    ];

    /// The SQL table name backing this category
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CourseReviews => "course_reviews",
            Self::CourseGrades => "course_grades",
            Self::ProfessorRatings => "prof_ratings",
            Self::ProfessorGrades => "prof_grades",
        }
    }
}

/// Composite cache key: a primary component and an optional secondary one
///
/// The secondary component uses the empty string as the "not narrowed"
/// sentinel, so one table serves both the broad and the narrowed lookup
/// shapes. Callers normalize case before building a key; the cache treats
/// both components as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    primary: String,
    secondary: String,
}

impl CacheKey {
    /// Build a key from both components
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Build a key with the empty secondary sentinel
    pub fn primary_only(primary: impl Into<String>) -> Self {
        Self::new(primary, "")
    }

    /// The primary component
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The secondary component (empty string when not narrowed)
    pub fn secondary(&self) -> &str {
        &self.secondary
    }
}

/// Port for the durable result cache
///
/// Implementations must be safe for concurrent use; reads and writes for a
/// given key are last-writer-wins with no versioning.
#[async_trait]
pub trait ResultCachePort: Send + Sync + std::fmt::Debug {
    /// Look up a value by table and composite key.
    ///
    /// Returns `None` when no row exists or when the row is older than
    /// `ttl`. Misses are not errors; only storage faults are.
    async fn get_bytes(
        &self,
        table: CacheTable,
        key: &CacheKey,
        ttl: Duration,
    ) -> Result<Option<Vec<u8>>, ApplicationError>;

    /// Unconditionally upsert a value with the current time as its
    /// stored-at timestamp. Last write wins; there is no merge.
    async fn put_bytes(
        &self,
        table: CacheTable,
        key: &CacheKey,
        value: Vec<u8>,
    ) -> Result<(), ApplicationError>;
}

/// Extension trait for typed cache operations
///
/// Serde round-trips on top of the raw byte interface; payloads are JSON.
#[async_trait]
pub trait ResultCacheExt: ResultCachePort {
    /// Get a typed value from the cache
    async fn get<T>(
        &self,
        table: CacheTable,
        key: &CacheKey,
        ttl: Duration,
    ) -> Result<Option<T>, ApplicationError>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        match self.get_bytes(table, key, ttl).await? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes).map_err(|e| {
                    ApplicationError::Storage(format!("cache deserialization error: {e}"))
                })?;
                Ok(Some(value))
            },
            None => Ok(None),
        }
    }

    /// Put a typed value into the cache
    async fn put<T>(
        &self,
        table: CacheTable,
        key: &CacheKey,
        value: &T,
    ) -> Result<(), ApplicationError>
    where
        T: serde::Serialize + Send + Sync,
    {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| ApplicationError::Storage(format!("cache serialization error: {e}")))?;
        self.put_bytes(table, key, bytes).await
    }
}

// Blanket implementation for all ResultCachePort implementors
impl<T: ResultCachePort + ?Sized> ResultCacheExt for T {}

/// Standard TTL values for the cached data categories
pub mod ttl {
    use std::time::Duration;

    /// Default validity window for every category (72 hours)
    pub const DEFAULT: Duration = Duration::from_secs(72 * 60 * 60);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_match_schema() {
        assert_eq!(CacheTable::CourseReviews.as_str(), "course_reviews");
        assert_eq!(CacheTable::CourseGrades.as_str(), "course_grades");
        assert_eq!(CacheTable::ProfessorRatings.as_str(), "prof_ratings");
        assert_eq!(CacheTable::ProfessorGrades.as_str(), "prof_grades");
    }

    #[test]
    fn all_lists_every_table_once() {
        assert_eq!(CacheTable::ALL.len(), 4);
    }

    #[test]
    fn primary_only_uses_empty_sentinel() {
        let key = CacheKey::primary_only("CMSC132");
        assert_eq!(key.primary(), "CMSC132");
        assert_eq!(key.secondary(), "");
    }

    #[test]
    fn keys_with_distinct_secondaries_differ() {
        let broad = CacheKey::primary_only("CMSC132");
        let narrowed = CacheKey::new("CMSC132", "kruskal");
        assert_ne!(broad, narrowed);
    }

    #[test]
    fn default_ttl_is_72_hours() {
        assert_eq!(ttl::DEFAULT, Duration::from_secs(259_200));
    }
}
