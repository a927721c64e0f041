//! terpdigest HTTP presentation layer
//!
//! Thin REST service exposing cached campus review data.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
