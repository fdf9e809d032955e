//! Validation of configuration maps supplied from outside the builder.
//!
//! Checks key completeness, the catalog name, and that every
//! `FULL_SCHEMA_*` value equals `CATALOG_NAME.SCHEMA_*`. Storage paths are
//! taken as given.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::builder::qualify;
use crate::environment::Environment;
use crate::keys;
use crate::layout::SchemaTier;

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub key: String,
    pub message: String,
}

impl ValidationError {
    fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// All findings for one map. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError::new(key, message));
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "valid");
        }
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

/// Validate a raw key/value map.
pub fn validate_map(values: &BTreeMap<String, String>) -> ValidationResult {
    let mut result = ValidationResult::default();

    for key in keys::ALL_KEYS {
        if !values.contains_key(key) {
            result.push(key, "missing");
        }
    }

    for key in values.keys() {
        if !keys::is_known(key) {
            result.push(key.as_str(), "unexpected key");
        }
    }

    let Some(catalog) = values.get(keys::CATALOG_NAME) else {
        return result;
    };

    if Environment::from_catalog(catalog).is_none() {
        result.push(
            keys::CATALOG_NAME,
            format!("unknown catalog {catalog:?}"),
        );
    }

    for tier in SchemaTier::ALL {
        let (Some(schema), Some(full)) = (
            values.get(tier.schema_key()),
            values.get(tier.full_schema_key()),
        ) else {
            continue;
        };
        let expected = qualify(catalog, schema);
        if *full != expected {
            result.push(
                tier.full_schema_key(),
                format!("expected {expected:?}, found {full:?}"),
            );
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::get_config;

    fn dev_map() -> BTreeMap<String, String> {
        get_config("dev").into_map()
    }

    #[test]
    fn built_configs_are_valid() {
        for env in Environment::ALL {
            let result = validate_map(crate::get_config_for(env).as_map());
            assert!(result.is_valid(), "{env}: {result}");
        }
    }

    #[test]
    fn missing_key_reported() {
        let mut map = dev_map();
        map.remove(keys::CHECKPOINT_PATH_BASE);
        let result = validate_map(&map);
        assert_eq!(
            result.errors,
            vec![ValidationError::new(keys::CHECKPOINT_PATH_BASE, "missing")]
        );
    }

    #[test]
    fn extra_key_reported() {
        let mut map = dev_map();
        map.insert("PATH_RETURNS".into(), "abfss://adv@x/returns".into());
        let result = validate_map(&map);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].key, "PATH_RETURNS");
    }

    #[test]
    fn unknown_catalog_reported() {
        let mut map = dev_map();
        map.insert(keys::CATALOG_NAME.into(), "ecommerce_qa".into());
        for tier in SchemaTier::ALL {
            let schema = map[tier.schema_key()].clone();
            map.insert(
                tier.full_schema_key().into(),
                qualify("ecommerce_qa", &schema),
            );
        }
        let result = validate_map(&map);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].key, keys::CATALOG_NAME);
    }

    #[test]
    fn stale_full_schema_reported() {
        let mut map = dev_map();
        map.insert(keys::CATALOG_NAME.into(), "ecommerce_prod".into());
        let result = validate_map(&map);
        let flagged: Vec<&str> = result.errors.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(
            flagged,
            vec![
                keys::FULL_SCHEMA_BRONZE,
                keys::FULL_SCHEMA_SILVER,
                keys::FULL_SCHEMA_GOLD
            ]
        );
    }

    #[test]
    fn empty_map_lists_every_key() {
        let result = validate_map(&BTreeMap::new());
        assert_eq!(result.errors.len(), keys::ALL_KEYS.len());
        assert!(result.to_string().starts_with("SCHEMA_BRONZE: missing"));
    }
}
