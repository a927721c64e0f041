//! Domain layer for terpdigest
//!
//! Contains the pure business logic of the review proxy: grade aggregation,
//! review bucketing, and the value objects used as cache-key components.
//! This layer has no async code and no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
