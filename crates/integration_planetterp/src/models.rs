//! PlanetTerp API response models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A student review attached to a course or professor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Professor the review is attached to
    #[serde(default)]
    pub professor: String,
    /// Free-form review text
    #[serde(default)]
    pub review: String,
}

/// A course record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Canonical course identifier, e.g. `CMSC132`
    pub name: String,
    /// Reviews, present when requested
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// A professor record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professor {
    /// Canonical professor name
    pub name: String,
    /// Numeric average rating, absent for unrated professors
    #[serde(default)]
    pub average_rating: Option<f64>,
    /// Reviews, present only when requested
    #[serde(default)]
    pub reviews: Option<Vec<Review>>,
}

/// One section's grade record
///
/// The API mixes identification fields (course, professor, semester) with
/// per-letter counts in a flat object, so everything beyond the known fields
/// is captured loosely and filtered by the consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSection {
    /// Course the section belongs to
    #[serde(default)]
    pub course: Option<String>,
    /// Professor who taught the section
    #[serde(default)]
    pub professor: Option<String>,
    /// Remaining fields: letter-grade counts plus metadata like `semester`
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

impl GradeSection {
    /// Extract the numeric grade counts, dropping non-numeric metadata
    pub fn counts(&self) -> HashMap<String, u64> {
        self.fields
            .iter()
            .filter_map(|(k, v)| v.as_u64().map(|n| (k.clone(), n)))
            .collect()
    }
}
