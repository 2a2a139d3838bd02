//! Application services: block extraction, rendering, and page assembly.

pub mod extract;
pub mod generate;
pub mod markdown;
pub mod page;
