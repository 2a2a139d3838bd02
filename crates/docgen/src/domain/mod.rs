//! Core domain types shared across the generator.

pub mod errors;
pub mod model;
