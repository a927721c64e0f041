//! PlanetTerp provider adapter
//!
//! Implements the `ReviewProviderPort` over the PlanetTerp HTTP client.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{
    CourseRecord, GradeSection, ProfessorRecord, ProviderReview, ReviewProviderPort,
};
use async_trait::async_trait;
use integration_planetterp::{PlanetTerpClient, PlanetTerpError, Review};
use tracing::instrument;

/// Adapter from the PlanetTerp client to the provider port
#[derive(Debug)]
pub struct PlanetTerpAdapter {
    client: Arc<dyn PlanetTerpClient>,
}

impl PlanetTerpAdapter {
    /// Create a new adapter over the given client
    pub fn new(client: Arc<dyn PlanetTerpClient>) -> Self {
        Self { client }
    }
}

fn map_error(e: PlanetTerpError) -> ApplicationError {
    ApplicationError::UpstreamFetch(e.to_string())
}

fn map_review(review: Review) -> ProviderReview {
    ProviderReview {
        professor: review.professor,
        review: review.review,
    }
}

#[async_trait]
impl ReviewProviderPort for PlanetTerpAdapter {
    #[instrument(skip(self))]
    async fn course(&self, name: &str) -> Result<CourseRecord, ApplicationError> {
        let course = self.client.course(name).await.map_err(map_error)?;
        Ok(CourseRecord {
            name: course.name,
            reviews: course.reviews.into_iter().map(map_review).collect(),
        })
    }

    #[instrument(skip(self))]
    async fn grades(
        &self,
        course: Option<&str>,
        professor: Option<&str>,
    ) -> Result<Vec<GradeSection>, ApplicationError> {
        let sections = self
            .client
            .grades(course, professor)
            .await
            .map_err(map_error)?;
        Ok(sections.iter().map(|s| s.counts()).collect())
    }

    #[instrument(skip(self))]
    async fn professor(
        &self,
        name: &str,
        reviews: bool,
    ) -> Result<ProfessorRecord, ApplicationError> {
        let prof = self
            .client
            .professor(name, reviews)
            .await
            .map_err(map_error)?;
        Ok(ProfessorRecord {
            name: prof.name,
            average_rating: prof.average_rating,
            reviews: prof
                .reviews
                .map(|rs| rs.into_iter().map(map_review).collect()),
        })
    }

    #[instrument(skip(self))]
    async fn courses(&self, limit: u32, offset: u32) -> Result<Vec<String>, ApplicationError> {
        self.client.courses(limit, offset).await.map_err(map_error)
    }

    #[instrument(skip(self))]
    async fn professors(&self, limit: u32, offset: u32) -> Result<Vec<String>, ApplicationError> {
        self.client
            .professors(limit, offset)
            .await
            .map_err(map_error)
    }
}
