//! Grade distribution entity
//!
//! Aggregates raw per-section grade counts into a fixed-symbol histogram with
//! a derived grade-point average. Withdrawals (`W`) appear in the histogram
//! but never enter the GPA denominator.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// The fixed set of recognized grade symbols, in display order.
pub const GRADE_SYMBOLS: [&str; 14] = [
    "A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "D-", "F", "W",
];

/// Grade-point value for a recognized symbol, `None` otherwise.
pub fn grade_points(symbol: &str) -> Option<f64> {
    match symbol {
        "A+" | "A" => Some(4.0),
        "A-" => Some(3.7),
        "B+" => Some(3.3),
        "B" => Some(3.0),
        "B-" => Some(2.7),
        "C+" => Some(2.3),
        "C" => Some(2.0),
        "C-" => Some(1.7),
        "D+" => Some(1.3),
        "D" => Some(1.0),
        "D-" => Some(0.7),
        "F" | "W" => Some(0.0),
        _ => None,
    }
}

/// A grade histogram with its derived GPA
///
/// Every recognized symbol is always present in `counts`, zero-filled when
/// absent from the input. Serializes with the histogram flattened next to the
/// `gpa` field, which is the shape stored in the result cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeDistribution {
    /// Per-symbol counts (all recognized symbols present)
    #[serde(flatten)]
    counts: BTreeMap<String, u64>,
    /// Grade-point average over all non-W grades; 0.0 when nothing was taken
    pub gpa: f64,
}

impl GradeDistribution {
    /// Aggregate raw per-section grade counts into a single distribution.
    ///
    /// Unrecognized keys in the input maps (section metadata, unknown grade
    /// notations) are silently ignored rather than treated as errors.
    pub fn aggregate<'a, I>(sections: I) -> Self
    where
        I: IntoIterator<Item = &'a HashMap<String, u64>>,
    {
        let mut counts: BTreeMap<String, u64> = GRADE_SYMBOLS
            .iter()
            .map(|s| ((*s).to_string(), 0))
            .collect();

        for section in sections {
            for (grade, n) in section {
                if let Some(bucket) = counts.get_mut(grade.as_str()) {
                    *bucket += n;
                }
            }
        }

        let gpa = Self::compute_gpa(&counts);
        Self { counts, gpa }
    }

    /// Count for a single symbol (0 for unrecognized symbols)
    pub fn count(&self, symbol: &str) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// The full histogram
    pub const fn counts(&self) -> &BTreeMap<String, u64> {
        &self.counts
    }

    /// Total number of grades awarded, excluding withdrawals
    pub fn total_taken(&self) -> u64 {
        self.counts
            .iter()
            .filter(|(g, _)| g.as_str() != "W")
            .map(|(_, n)| n)
            .sum()
    }

    #[allow(clippy::cast_precision_loss)]
    fn compute_gpa(counts: &BTreeMap<String, u64>) -> f64 {
        let total_points: f64 = counts
            .iter()
            .filter_map(|(g, n)| grade_points(g).map(|p| p * *n as f64))
            .sum();
        let total_taken: u64 = counts
            .iter()
            .filter(|(g, _)| g.as_str() != "W")
            .map(|(_, n)| n)
            .sum();

        if total_taken == 0 {
            0.0
        } else {
            total_points / total_taken as f64
        }
    }
}
