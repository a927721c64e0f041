//! Map-reduce summarization pipeline
//!
//! Turns an unbounded review list into one bounded summary: reviews are
//! packed into size-capped batches, each batch is summarized concurrently,
//! and the per-batch summaries are merged by a final combine call. A single
//! batch skips the combine stage entirely.

use std::sync::Arc;

use domain::bucketize;
use futures::future::try_join_all;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{SummarizerPort, SummaryMode};

/// Returned without any model call when the selection has no reviews
pub const NO_REVIEWS_SENTINEL: &str = "No user reviews present for this selection.";

/// Sentence budget for each intermediate batch summary
const MAP_SENTENCES: u8 = 3;

/// Tunables for the pipeline
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Maximum characters packed into one batch
    pub max_bucket_chars: usize,
    /// Sentence budget for the final summary
    pub final_sentences: u8,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            max_bucket_chars: 40_000,
            final_sentences: 5,
        }
    }
}

/// Two-stage summarizer over a batched review list
#[derive(Debug)]
pub struct SummaryPipeline {
    summarizer: Arc<dyn SummarizerPort>,
    settings: PipelineSettings,
}

impl SummaryPipeline {
    /// Create a pipeline over the given summarizer
    pub fn new(summarizer: Arc<dyn SummarizerPort>, settings: PipelineSettings) -> Self {
        Self {
            summarizer,
            settings,
        }
    }

    /// Summarize `reviews` into a single paragraph.
    ///
    /// Any failed batch aborts the whole run; partial summaries are never
    /// returned.
    #[instrument(skip(self, reviews), fields(review_count = reviews.len()))]
    pub async fn summarize(&self, reviews: Vec<String>) -> Result<String, ApplicationError> {
        if reviews.is_empty() {
            return Ok(NO_REVIEWS_SENTINEL.to_string());
        }

        let batches = bucketize(reviews, self.settings.max_bucket_chars)?;
        debug!(batch_count = batches.len(), "packed reviews into batches");

        if batches.len() == 1 {
            let only = batches.into_iter().next().map_or_else(Vec::new, |b| b.into_items());
            let summary = self
                .summarizer
                .summarize(&only, self.settings.final_sentences, SummaryMode::Sentiment)
                .await?;
            return Ok(normalize(&summary));
        }

        let map_calls = batches.iter().map(|batch| {
            self.summarizer
                .summarize(batch.items(), MAP_SENTENCES, SummaryMode::Sentiment)
        });
        let partials = try_join_all(map_calls).await?;

        let combined = self
            .summarizer
            .summarize(&partials, self.settings.final_sentences, SummaryMode::Combine)
            .await?;
        Ok(normalize(&combined))
    }
}

/// Collapse interior whitespace and newlines into single spaces
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
