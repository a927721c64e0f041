//! Professor name value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A normalized professor name
///
/// Names are matched and cached case-insensitively; the canonical form is
/// lower-cased with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfessorName(String);

impl ProfessorName {
    /// Normalize a raw professor name
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::ValidationError(
                "professor name must not be empty".to_string(),
            ));
        }
        Ok(Self(normalized))
    }

    /// The canonical lower-cased form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive containment check against a raw name as it appears
    /// in upstream review records
    pub fn matches(&self, raw: &str) -> bool {
        raw.to_lowercase().contains(&self.0)
    }
}

impl fmt::Display for ProfessorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
