//! Infrastructure layer for terpdigest
//!
//! Concrete adapters behind the application ports: SQLite result cache,
//! PlanetTerp provider, Ollama-backed summarizer, configuration loading and
//! scheduled prefetch tasks.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod scheduled_tasks;

pub use config::AppConfig;
