//! Infrastructure adapters: configuration loading.

pub mod config;
