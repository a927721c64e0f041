//! Result-cache TTL configuration.

use std::time::Duration;

use application::services::TtlSettings;
use serde::{Deserialize, Serialize};

/// Per-table cache TTLs, in hours
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Validity window for summarized course reviews
    #[serde(default = "default_ttl_hours")]
    pub course_reviews_ttl_hours: u64,

    /// Validity window for course grade distributions
    #[serde(default = "default_ttl_hours")]
    pub course_grades_ttl_hours: u64,

    /// Validity window for professor ratings
    #[serde(default = "default_ttl_hours")]
    pub professor_ratings_ttl_hours: u64,

    /// Validity window for professor grade distributions
    #[serde(default = "default_ttl_hours")]
    pub professor_grades_ttl_hours: u64,
}

const fn default_ttl_hours() -> u64 {
    72
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            course_reviews_ttl_hours: default_ttl_hours(),
            course_grades_ttl_hours: default_ttl_hours(),
            professor_ratings_ttl_hours: default_ttl_hours(),
            professor_grades_ttl_hours: default_ttl_hours(),
        }
    }
}

impl CacheConfig {
    /// Convert to the application-layer settings struct
    pub const fn to_settings(&self) -> TtlSettings {
        TtlSettings {
            course_reviews: Duration::from_secs(self.course_reviews_ttl_hours * 3600),
            course_grades: Duration::from_secs(self.course_grades_ttl_hours * 3600),
            professor_ratings: Duration::from_secs(self.professor_ratings_ttl_hours * 3600),
            professor_grades: Duration::from_secs(self.professor_grades_ttl_hours * 3600),
        }
    }
}
