//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Course endpoints
        .route(
            "/class/{course}/reviews/{professor}",
            get(handlers::class::class_reviews),
        )
        .route("/class/{course}/grades", get(handlers::class::class_grades))
        .route(
            "/class/{course}/grades/{professor}",
            get(handlers::class::class_grades_for_professor),
        )
        // Professor endpoints
        .route(
            "/professor/{name}/ratings",
            get(handlers::professor::professor_ratings),
        )
        .route(
            "/professor/{name}/reviews",
            get(handlers::professor::professor_reviews),
        )
        .route(
            "/professor/{name}/grades",
            get(handlers::professor::professor_grades),
        )
        // Health endpoint
        .route("/healthz", get(handlers::health::health_check))
        // Attach state
        .with_state(state)
}
