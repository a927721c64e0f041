//! Factory functions for the scheduled prefetch sweeps
//!
//! Provides pre-built task closures for the cron scheduler:
//! - Course sweep (weekly)
//! - Professor sweep (weekly)

use std::sync::Arc;

use application::ReviewDigestService;
use futures::future::BoxFuture;
use tracing::{error, info};

/// Task name for the course sweep
pub const COURSE_SWEEP_TASK: &str = "course_sweep";
/// Task name for the professor sweep
pub const PROFESSOR_SWEEP_TASK: &str = "professor_sweep";

/// Create the course sweep task closure
///
/// Walks the full course catalog and warms the grade cache for each course.
pub fn create_course_sweep_task(
    service: Arc<ReviewDigestService>,
) -> impl Fn() -> BoxFuture<'static, Result<(), String>> + Send + Sync + 'static {
    move || {
        let service = Arc::clone(&service);
        Box::pin(async move {
            info!(task = COURSE_SWEEP_TASK, "starting scheduled sweep");
            match service.prefetch_all_courses().await {
                Ok(()) => {
                    info!(task = COURSE_SWEEP_TASK, "sweep completed");
                    Ok(())
                },
                Err(e) => {
                    error!(task = COURSE_SWEEP_TASK, error = %e, "sweep failed");
                    Err(format!("Course sweep failed: {e}"))
                },
            }
        })
    }
}

/// Create the professor sweep task closure
///
/// Walks the full professor catalog and warms ratings, review summaries and
/// grade distributions for each professor.
pub fn create_professor_sweep_task(
    service: Arc<ReviewDigestService>,
) -> impl Fn() -> BoxFuture<'static, Result<(), String>> + Send + Sync + 'static {
    move || {
        let service = Arc::clone(&service);
        Box::pin(async move {
            info!(task = PROFESSOR_SWEEP_TASK, "starting scheduled sweep");
            match service.prefetch_all_professors().await {
                Ok(()) => {
                    info!(task = PROFESSOR_SWEEP_TASK, "sweep completed");
                    Ok(())
                },
                Err(e) => {
                    error!(task = PROFESSOR_SWEEP_TASK, error = %e, "sweep failed");
                    Err(format!("Professor sweep failed: {e}"))
                },
            }
        })
    }
}
