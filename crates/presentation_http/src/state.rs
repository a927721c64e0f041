//! Application state shared across handlers

use std::sync::Arc;

use application::ports::ReviewFetcher;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Cached read operations over the upstream provider
    pub fetcher: Arc<dyn ReviewFetcher>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
