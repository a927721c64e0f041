//! Summarizer port
//!
//! Single-call interface to the text-generation backend. The pipeline drives
//! it in two stages; the mode selects which instruction profile the adapter
//! sends along with the texts.

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Instruction profile for a summarization call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    /// Distill raw review texts into an overall sentiment
    Sentiment,
    /// Merge already-summarized fragments into one coherent summary
    Combine,
}

/// Port for the review summarizer
#[async_trait]
pub trait SummarizerPort: Send + Sync + std::fmt::Debug {
    /// Summarize `texts` into at most `sentences` sentences.
    ///
    /// The returned string is a single line; adapters strip interior
    /// newlines before returning.
    async fn summarize(
        &self,
        texts: &[String],
        sentences: u8,
        mode: SummaryMode,
    ) -> Result<String, ApplicationError>;
}
