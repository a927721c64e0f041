//! Inference engine abstraction for terpdigest
//!
//! Defines the chat-completion port the summarization adapters drive, plus
//! the Ollama-compatible HTTP implementation used in production.

pub mod config;
pub mod error;
pub mod ollama;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use ollama::OllamaInferenceEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse};
