//! Course code value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A normalized course code (e.g. `CMSC132`)
///
/// Course codes are compared and cached case-insensitively; the canonical
/// form is upper-cased with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseCode(String);

impl CourseCode {
    /// Normalize a raw course code
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(DomainError::ValidationError(
                "course code must not be empty".to_string(),
            ));
        }
        Ok(Self(normalized))
    }

    /// The canonical upper-cased form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
