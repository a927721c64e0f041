//! Summarization pipeline configuration.

use application::services::PipelineSettings;
use serde::{Deserialize, Serialize};

/// Batching and sentence budgets for the summarization pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum characters packed into one review batch
    #[serde(default = "default_max_bucket_chars")]
    pub max_bucket_chars: usize,

    /// Sentence budget for the final summary
    #[serde(default = "default_final_sentences")]
    pub final_sentences: u8,
}

const fn default_max_bucket_chars() -> usize {
    40_000
}

const fn default_final_sentences() -> u8 {
    5
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_bucket_chars: default_max_bucket_chars(),
            final_sentences: default_final_sentences(),
        }
    }
}

impl PipelineConfig {
    /// Convert to the application-layer settings struct
    pub const fn to_settings(&self) -> PipelineSettings {
        PipelineSettings {
            max_bucket_chars: self.max_bucket_chars,
            final_sentences: self.final_sentences,
        }
    }
}
