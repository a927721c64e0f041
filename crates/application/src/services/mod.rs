//! Application services

pub mod review_digest_service;
pub mod summary_pipeline;

pub use review_digest_service::{ReviewDigestService, SweepSettings, TtlSettings};
pub use summary_pipeline::{NO_REVIEWS_SENTINEL, PipelineSettings, SummaryPipeline};
