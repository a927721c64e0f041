//! Domain entities

pub mod grade_distribution;
pub mod review_batch;

pub use grade_distribution::{GRADE_SYMBOLS, GradeDistribution, grade_points};
pub use review_batch::{ReviewBatch, bucketize};
