//! Course endpoint handlers

use application::ports::ReviewSummary;
use axum::{Json, extract::Path, extract::State};
use domain::GradeDistribution;

use crate::{error::ApiError, state::AppState};

/// Reviews for a course, filtered to one professor
pub async fn class_reviews(
    State(state): State<AppState>,
    Path((course, professor)): Path<(String, String)>,
) -> Result<Json<ReviewSummary>, ApiError> {
    let summary = state.fetcher.course_reviews(&course, &professor).await?;
    Ok(Json(summary))
}

/// Grade distribution for a course
pub async fn class_grades(
    State(state): State<AppState>,
    Path(course): Path<String>,
) -> Result<Json<GradeDistribution>, ApiError> {
    let distribution = state.fetcher.course_grades(&course, None).await?;
    Ok(Json(distribution))
}

/// Grade distribution for a course taught by one professor
pub async fn class_grades_for_professor(
    State(state): State<AppState>,
    Path((course, professor)): Path<(String, String)>,
) -> Result<Json<GradeDistribution>, ApiError> {
    let distribution = state
        .fetcher
        .course_grades(&course, Some(&professor))
        .await?;
    Ok(Json(distribution))
}
