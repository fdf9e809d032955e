//! Environment-specific configuration for the e-commerce data pipeline.
//!
//! This crate provides:
//! - `get_config`, the total label → configuration builder
//! - Typed views of the environment, schema tiers and processing modes
//! - The static storage layout shared by every environment
//! - Validation of externally supplied configuration maps
//! - Hashed configuration snapshots for run records

pub mod builder;
pub mod configuration;
pub mod environment;
pub mod keys;
pub mod layout;
pub mod snapshot;
pub mod validate;

pub use builder::{get_config, get_config_for, ConfigBuilder};
pub use configuration::Configuration;
pub use environment::Environment;
pub use layout::{ProcessingMode, SchemaTier, StorageLayout};
pub use snapshot::ConfigSnapshot;
pub use validate::{validate_map, ValidationError, ValidationResult};

/// Separator between catalog and schema in fully-qualified schema names.
pub const SCHEMA_SEPARATOR: char = '.';
