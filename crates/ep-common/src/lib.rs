//! Shared types for the e-commerce pipeline configuration crates.
//!
//! This crate provides:
//! - The unified error type and `Result` alias
//! - Output format selection for rendered configurations
//! - Schema versioning for persisted snapshots

pub mod error;
pub mod output;
pub mod schema;

pub use error::{Error, Result};
pub use output::OutputFormat;
pub use schema::SCHEMA_VERSION;
