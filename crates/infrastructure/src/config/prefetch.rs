//! Prefetch sweep configuration.

use std::time::Duration;

use application::services::SweepSettings;
use serde::{Deserialize, Serialize};

/// Schedule and pacing for the cache-warming sweeps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefetchConfig {
    /// Enable the scheduled sweeps
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Cron expression for the course sweep (default: weekly, Sunday 02:00)
    #[serde(default = "default_course_cron")]
    pub course_cron: String,

    /// Cron expression for the professor sweep (default: weekly, Sunday 04:00)
    #[serde(default = "default_professor_cron")]
    pub professor_cron: String,

    /// Catalog page size
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Pause between catalog pages, in seconds
    #[serde(default = "default_page_delay_secs")]
    pub page_delay_secs: u64,

    /// Pause between warmed entities, in seconds
    #[serde(default = "default_entity_delay_secs")]
    pub entity_delay_secs: u64,
}

const fn default_enabled() -> bool {
    true
}

fn default_course_cron() -> String {
    "0 0 2 * * Sun".to_string()
}

fn default_professor_cron() -> String {
    "0 0 4 * * Sun".to_string()
}

const fn default_page_size() -> u32 {
    100
}

const fn default_page_delay_secs() -> u64 {
    4
}

const fn default_entity_delay_secs() -> u64 {
    5
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            course_cron: default_course_cron(),
            professor_cron: default_professor_cron(),
            page_size: default_page_size(),
            page_delay_secs: default_page_delay_secs(),
            entity_delay_secs: default_entity_delay_secs(),
        }
    }
}

impl PrefetchConfig {
    /// Convert to the application-layer settings struct
    pub const fn to_settings(&self) -> SweepSettings {
        SweepSettings {
            page_size: self.page_size,
            page_delay: Duration::from_secs(self.page_delay_secs),
            entity_delay: Duration::from_secs(self.entity_delay_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pacing_matches_polite_limits() {
        let settings = PrefetchConfig::default().to_settings();
        assert_eq!(settings.page_size, 100);
        assert_eq!(settings.page_delay, Duration::from_secs(4));
        assert_eq!(settings.entity_delay, Duration::from_secs(5));
    }
}
