//! Application ports
//!
//! Interfaces the core depends on; concrete adapters live in the
//! infrastructure crate.

pub mod cache_port;
pub mod fetcher_port;
pub mod provider_port;
pub mod summarizer_port;

pub use cache_port::{CacheKey, CacheTable, ResultCacheExt, ResultCachePort, ttl};
pub use fetcher_port::{ProfessorRatings, ReviewFetcher, ReviewSummary};
pub use provider_port::{
    CourseRecord, GradeSection, ProfessorRecord, ProviderReview, ReviewProviderPort,
};
pub use summarizer_port::{SummarizerPort, SummaryMode};
