//! Upstream review-provider port
//!
//! The read-only source of record for courses, professors, reviews and
//! per-section grade counts. The application never writes upstream.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ApplicationError;

/// A single student review as delivered by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReview {
    /// Professor the review is attached to
    pub professor: String,
    /// Free-form review text
    pub review: String,
}

/// Course record with its attached reviews
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    /// Canonical course identifier
    pub name: String,
    /// Reviews attached to the course, across all professors
    pub reviews: Vec<ProviderReview>,
}

/// Professor record, optionally including reviews
#[derive(Debug, Clone, PartialEq)]
pub struct ProfessorRecord {
    /// Canonical professor name
    pub name: String,
    /// Numeric average rating, absent when the professor has none
    pub average_rating: Option<f64>,
    /// Reviews, present only when explicitly requested
    pub reviews: Option<Vec<ProviderReview>>,
}

/// One section's worth of grade counts: letter symbol to count
pub type GradeSection = HashMap<String, u64>;

/// Port for the upstream review provider
#[async_trait]
pub trait ReviewProviderPort: Send + Sync + std::fmt::Debug {
    /// Fetch a course and its reviews
    async fn course(&self, name: &str) -> Result<CourseRecord, ApplicationError>;

    /// Fetch per-section grade counts, narrowed by course and/or professor.
    ///
    /// At least one of the two filters is expected to be present; the
    /// provider decides how to interpret combinations.
    async fn grades(
        &self,
        course: Option<&str>,
        professor: Option<&str>,
    ) -> Result<Vec<GradeSection>, ApplicationError>;

    /// Fetch a professor record, with reviews included when `reviews` is set
    async fn professor(
        &self,
        name: &str,
        reviews: bool,
    ) -> Result<ProfessorRecord, ApplicationError>;

    /// List course identifiers, paginated
    async fn courses(&self, limit: u32, offset: u32) -> Result<Vec<String>, ApplicationError>;

    /// List professor names, paginated
    async fn professors(&self, limit: u32, offset: u32) -> Result<Vec<String>, ApplicationError>;
}
