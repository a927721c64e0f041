//! Request handlers

pub mod class;
pub mod health;
pub mod professor;
