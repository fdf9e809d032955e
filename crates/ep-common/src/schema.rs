//! Schema versioning and compatibility.

/// Current schema version for persisted configuration snapshots.
///
/// Follows semver: MAJOR.MINOR.PATCH
/// - MAJOR: Breaking changes (key removals, renamed keys)
/// - MINOR: Additive changes (new keys)
/// - PATCH: Bug fixes, documentation
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Check if a schema version is compatible with current.
pub fn is_compatible(version: &str) -> bool {
    major(SCHEMA_VERSION).is_some() && major(SCHEMA_VERSION) == major(version)
}

fn major(version: &str) -> Option<u32> {
    version.split('.').next().and_then(|s| s.parse::<u32>().ok())
}
