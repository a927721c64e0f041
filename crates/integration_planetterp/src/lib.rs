//! PlanetTerp API integration
//!
//! Client for the PlanetTerp campus review API
//! (<https://planetterp.com/api/>). Provides course reviews, professor
//! ratings and per-section grade counts.

pub mod client;
pub mod models;

pub use client::{HttpPlanetTerpClient, PlanetTerpClient, PlanetTerpConfig, PlanetTerpError};
pub use models::{Course, GradeSection, Professor, Review};
