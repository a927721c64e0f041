//! Professor endpoint handlers

use application::ports::ProfessorRatings;
use axum::{Json, extract::Path, extract::State};
use domain::GradeDistribution;

use crate::{error::ApiError, state::AppState};

/// Ratings for a professor, without the review digest
pub async fn professor_ratings(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ProfessorRatings>, ApiError> {
    let ratings = state.fetcher.professor_ratings(&name, false).await?;
    Ok(Json(ratings))
}

/// Ratings for a professor, including a digest of their reviews
pub async fn professor_reviews(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ProfessorRatings>, ApiError> {
    let ratings = state.fetcher.professor_ratings(&name, true).await?;
    Ok(Json(ratings))
}

/// Aggregated grade distribution across everything a professor has taught
pub async fn professor_grades(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<GradeDistribution>, ApiError> {
    let distribution = state.fetcher.professor_grades(&name).await?;
    Ok(Json(distribution))
}
