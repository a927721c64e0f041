//! Port adapters
//!
//! Bridge the application ports to the integration crates.

pub mod ollama_summarizer_adapter;
pub mod planetterp_adapter;

pub use ollama_summarizer_adapter::OllamaSummarizerAdapter;
pub use planetterp_adapter::PlanetTerpAdapter;
