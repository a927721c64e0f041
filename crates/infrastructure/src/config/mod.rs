//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `server`: HTTP server settings
//! - `database`: SQLite database settings
//! - `cache`: per-table result-cache TTLs
//! - `pipeline`: summarization batching and sentence budgets
//! - `prefetch`: sweep schedule and pacing

mod cache;
mod database;
mod pipeline;
mod prefetch;
mod server;

use ai_core::InferenceConfig;
use integration_planetterp::PlanetTerpConfig;
use serde::{Deserialize, Serialize};

pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use pipeline::PipelineConfig;
pub use prefetch::PrefetchConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Inference configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Upstream PlanetTerp configuration
    #[serde(default)]
    pub planetterp: PlanetTerpConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Result-cache TTL configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Summarization pipeline configuration
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Prefetch sweep configuration
    #[serde(default)]
    pub prefetch: PrefetchConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("inference.base_url", "http://localhost:11434")?
            .set_default("inference.default_model", "qwen2.5-1.5b-instruct")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., TERPDIGEST_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("TERPDIGEST")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_complete() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.path, "terpdigest.db");
        assert_eq!(config.cache.course_reviews_ttl_hours, 72);
        assert_eq!(config.pipeline.max_bucket_chars, 40_000);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.prefetch.page_size, config.prefetch.page_size);
    }
}
