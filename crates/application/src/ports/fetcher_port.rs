//! Review-fetcher port
//!
//! The inbound interface the HTTP layer calls. One method per read
//! operation; every method is cache-aside over the same composite-keyed
//! store.

use async_trait::async_trait;
use domain::GradeDistribution;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A finished review summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    /// Single-paragraph digest of the selected reviews
    pub summarized: String,
}

/// Professor ratings, with an optional review digest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessorRatings {
    /// Numeric average rating, absent when the professor has none
    pub average_rating: Option<f64>,
    /// Review digest, present only when reviews were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summarized: Option<String>,
}

/// Port for the cached read operations
#[async_trait]
pub trait ReviewFetcher: Send + Sync {
    /// Summarize the reviews of one course filtered to one professor
    async fn course_reviews(
        &self,
        course: &str,
        professor: &str,
    ) -> Result<ReviewSummary, ApplicationError>;

    /// Aggregate grade counts for a course, optionally narrowed to a professor
    async fn course_grades(
        &self,
        course: &str,
        professor: Option<&str>,
    ) -> Result<GradeDistribution, ApplicationError>;

    /// Fetch a professor's average rating, optionally with a review digest
    async fn professor_ratings(
        &self,
        professor: &str,
        reviews: bool,
    ) -> Result<ProfessorRatings, ApplicationError>;

    /// Aggregate grade counts across everything a professor has taught
    async fn professor_grades(
        &self,
        professor: &str,
    ) -> Result<GradeDistribution, ApplicationError>;
}
