//! Review batching
//!
//! Packs review texts into character-bounded batches for the summarizer.
//! A single first-fit pass keeps reviews in arrival order; an item that is
//! larger than the whole budget becomes a forced singleton batch rather than
//! being split or dropped.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// An ordered group of review texts whose combined character length stays
/// within the configured budget (except a forced singleton).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewBatch {
    items: Vec<String>,
    char_len: usize,
}

impl ReviewBatch {
    fn new(items: Vec<String>, char_len: usize) -> Self {
        Self { items, char_len }
    }

    /// The review texts, in arrival order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Combined character length of all items
    pub const fn char_len(&self) -> usize {
        self.char_len
    }

    /// Number of reviews in the batch
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the batch holds no reviews
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the batch, yielding its items
    pub fn into_items(self) -> Vec<String> {
        self.items
    }
}

/// Pack `items` into batches of at most `max_chars` characters.
///
/// Order preserving, first fit, no lookback. An item longer than `max_chars`
/// is emitted as its own singleton batch, closed immediately so following
/// items never share it. Returns `DomainError::InvalidArgument` when
/// `max_chars` is zero.
pub fn bucketize(items: Vec<String>, max_chars: usize) -> Result<Vec<ReviewBatch>, DomainError> {
    if max_chars == 0 {
        return Err(DomainError::InvalidArgument(
            "max_chars must be a positive integer".to_string(),
        ));
    }

    let mut batches: Vec<ReviewBatch> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_len = 0usize;

    for item in items {
        let item_len = item.chars().count();

        if !current.is_empty() && current_len + item_len > max_chars {
            batches.push(ReviewBatch::new(std::mem::take(&mut current), current_len));
            current_len = item_len;
            current.push(item);
        } else {
            current_len += item_len;
            current.push(item);
        }

        // An oversized item always sits alone; close its batch right away.
        if current_len == item_len && item_len > max_chars {
            batches.push(ReviewBatch::new(std::mem::take(&mut current), current_len));
            current_len = 0;
        }
    }

    if !current.is_empty() {
        batches.push(ReviewBatch::new(current, current_len));
    }

    Ok(batches)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn packs_in_order_with_first_fit() {
        let batches = bucketize(texts(&["aa", "bb", "cc"]), 4).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].items(), &["aa", "bb"]);
        assert_eq!(batches[1].items(), &["cc"]);
    }

    #[test]
    fn oversized_item_forms_singleton() {
        let batches = bucketize(texts(&["aaaaaa"]), 3).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].items(), &["aaaaaa"]);
        assert_eq!(batches[0].char_len(), 6);
    }

    #[test]
    fn oversized_item_never_shares_a_batch() {
        let batches = bucketize(texts(&["ab", "toolongtext", "cd"]), 4).unwrap();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].items(), &["ab"]);
        assert_eq!(batches[1].items(), &["toolongtext"]);
        assert_eq!(batches[2].items(), &["cd"]);
    }

    #[test]
    fn zero_budget_is_rejected() {
        let err = bucketize(texts(&["a"]), 0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn empty_input_yields_no_batches() {
        let batches = bucketize(Vec::new(), 10).unwrap();
        assert!(batches.is_empty());
    }

    #[test]
    fn exact_fit_stays_in_one_batch() {
        let batches = bucketize(texts(&["ab", "cd"]), 4).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].char_len(), 4);
    }

    #[test]
    fn lengths_are_characters_not_bytes() {
        // Four two-byte characters still fit a four-character budget.
        let batches = bucketize(texts(&["éé", "éé"]), 4).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].char_len(), 4);
    }

    proptest! {
        #[test]
        fn concatenation_preserves_input(
            items in proptest::collection::vec(".{0,20}", 0..30),
            max_chars in 1usize..50,
        ) {
            let batches = bucketize(items.clone(), max_chars).unwrap();
            let rebuilt: Vec<String> = batches
                .into_iter()
                .flat_map(ReviewBatch::into_items)
                .collect();
            prop_assert_eq!(rebuilt, items);
        }

        #[test]
        fn only_forced_singletons_exceed_budget(
            items in proptest::collection::vec(".{0,20}", 0..30),
            max_chars in 1usize..50,
        ) {
            let batches = bucketize(items, max_chars).unwrap();
            for batch in batches {
                prop_assert!(
                    batch.char_len() <= max_chars || batch.len() == 1,
                    "batch of {} items with {} chars exceeds {}",
                    batch.len(),
                    batch.char_len(),
                    max_chars
                );
            }
        }
    }
}
