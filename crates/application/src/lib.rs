//! Application layer for terpdigest
//!
//! Defines the ports (cache, upstream provider, summarizer) and the services
//! that compose them: the map-reduce summarization pipeline and the
//! cache-aside fetch orchestrator.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{ReviewDigestService, SummaryPipeline};
