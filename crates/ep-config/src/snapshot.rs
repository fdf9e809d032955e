//! Hashed configuration snapshots.
//!
//! A snapshot records which configuration a pipeline run used. The hash
//! covers only the values, so two snapshots of the same environment share a
//! hash regardless of when they were captured.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::debug;

use ep_common::schema::is_compatible;
use ep_common::{Error, Result, SCHEMA_VERSION};

use crate::configuration::Configuration;
use crate::environment::Environment;

/// A configuration plus the metadata needed to verify it later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub schema_version: String,
    pub environment: Environment,
    pub catalog_name: String,
    /// Lowercase hex SHA-256 of the canonical JSON of `values`.
    pub config_hash: String,
    pub captured_at: DateTime<Utc>,
    pub values: Configuration,
}

impl ConfigSnapshot {
    /// The recorded environment is derived from the configuration's catalog.
    pub fn capture(config: &Configuration) -> Result<Self> {
        Ok(Self {
            schema_version: SCHEMA_VERSION.to_string(),
            environment: config.environment(),
            catalog_name: config.catalog_name().to_string(),
            config_hash: config_hash(config)?,
            captured_at: Utc::now(),
            values: config.clone(),
        })
    }

    /// Check the schema version, recompute the hash, and check that the
    /// recorded catalog and environment match the values.
    pub fn verify(&self) -> Result<()> {
        if !is_compatible(&self.schema_version) {
            return Err(Error::UnsupportedSchema(self.schema_version.clone()));
        }
        let actual = config_hash(&self.values)?;
        if actual != self.config_hash {
            return Err(Error::SnapshotMismatch {
                expected: self.config_hash.clone(),
                actual,
            });
        }
        if self.catalog_name != self.values.catalog_name() {
            return Err(Error::InvalidConfig(format!(
                "snapshot catalog {:?} does not match values catalog {:?}",
                self.catalog_name,
                self.values.catalog_name()
            )));
        }
        if self.environment != self.values.environment() {
            return Err(Error::InvalidConfig(format!(
                "snapshot environment {} does not match values environment {}",
                self.environment,
                self.values.environment()
            )));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and verify.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: ConfigSnapshot = serde_json::from_str(json)?;
        snapshot.verify()?;
        Ok(snapshot)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        debug!(path = %path.display(), hash = %self.config_hash, "snapshot written");
        Ok(())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&content)?;
        debug!(path = %path.display(), env = %snapshot.environment, "snapshot loaded");
        Ok(snapshot)
    }
}

/// SHA-256 over the key-sorted JSON object.
pub fn config_hash(config: &Configuration) -> Result<String> {
    let canonical = serde_json::to_vec(config.as_map())?;
    Ok(hex::encode(Sha256::digest(&canonical)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::get_config_for;

    fn snapshot(env: Environment) -> ConfigSnapshot {
        ConfigSnapshot::capture(&get_config_for(env)).unwrap()
    }

    #[test]
    fn hash_is_stable_per_environment() {
        let a = snapshot(Environment::Prod);
        let b = snapshot(Environment::Prod);
        assert_eq!(a.config_hash, b.config_hash);
        assert_eq!(a.config_hash.len(), 64);
    }

    #[test]
    fn hash_differs_between_environments() {
        assert_ne!(
            snapshot(Environment::Dev).config_hash,
            snapshot(Environment::Staging).config_hash
        );
    }

    #[test]
    fn fresh_snapshot_verifies() {
        let snap = snapshot(Environment::Staging);
        assert!(snap.verify().is_ok());
        assert_eq!(snap.catalog_name, "ecommerce_staging");
    }

    #[test]
    fn tampered_hash_fails() {
        let mut snap = snapshot(Environment::Dev);
        snap.config_hash = "0".repeat(64);
        assert!(matches!(snap.verify(), Err(Error::SnapshotMismatch { .. })));
    }

    #[test]
    fn swapped_values_fail() {
        let mut snap = snapshot(Environment::Dev);
        snap.values = get_config_for(Environment::Prod);
        assert!(snap.verify().is_err());
    }

    #[test]
    fn capture_records_environment_of_values() {
        for env in Environment::ALL {
            assert_eq!(snapshot(env).environment, env);
        }
    }

    #[test]
    fn relabelled_environment_fails() {
        let mut snap = snapshot(Environment::Dev);
        snap.environment = Environment::Prod;
        assert!(matches!(snap.verify(), Err(Error::InvalidConfig(_))));

        let json = snap.to_json_pretty().unwrap();
        let err = ConfigSnapshot::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("environment prod"), "{err}");
    }

    #[test]
    fn future_major_rejected() {
        let mut snap = snapshot(Environment::Dev);
        snap.schema_version = "2.0.0".into();
        assert!(matches!(snap.verify(), Err(Error::UnsupportedSchema(_))));
    }

    #[test]
    fn json_round_trip_verifies() {
        let snap = snapshot(Environment::Prod);
        let json = snap.to_json_pretty().unwrap();
        let back = ConfigSnapshot::from_json(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        let snap = snapshot(Environment::Staging);
        snap.write_to(&path).unwrap();
        let back = ConfigSnapshot::load_from(&path).unwrap();
        assert_eq!(back.config_hash, snap.config_hash);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err =
            ConfigSnapshot::load_from(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert_eq!(err.code(), 60);
    }
}
