//! Configuration for inference engine

use serde::{Deserialize, Serialize};

/// Configuration for the inference engine
///
/// The defaults are tuned for short, faithful summaries: low temperature, a
/// mild repetition penalty and a tight generation budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the inference server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default model to use
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Temperature for sampling (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Top-p (nucleus) sampling
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Penalty against repeated tokens
    #[serde(default = "default_frequency_penalty")]
    pub frequency_penalty: f32,

    /// Stop sequences that terminate generation
    #[serde(default = "default_stop")]
    pub stop: Vec<String>,
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "qwen2.5-1.5b-instruct".to_string()
}

const fn default_timeout_ms() -> u64 {
    60000 // 60 seconds
}

const fn default_max_tokens() -> u32 {
    160
}

const fn default_temperature() -> f32 {
    0.1
}

const fn default_top_p() -> f32 {
    0.9
}

const fn default_frequency_penalty() -> f32 {
    0.2
}

fn default_stop() -> Vec<String> {
    vec!["<|im_end|>".to_string()]
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
            timeout_ms: default_timeout_ms(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            frequency_penalty: default_frequency_penalty(),
            stop: default_stop(),
        }
    }
}
