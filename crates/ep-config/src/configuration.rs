//! The built configuration mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Index;

use ep_common::Error;

use crate::environment::Environment;
use crate::keys;
use crate::layout::SchemaTier;
use crate::validate::validate_map;

/// Immutable key → value configuration for one environment.
///
/// Instances come from [`crate::get_config`] or from a map that passed
/// [`validate_map`], so every key in [`keys::ALL_KEYS`] is always present
/// and the `FULL_SCHEMA_*` values agree with the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct Configuration {
    values: BTreeMap<String, String>,
}

impl Configuration {
    /// Caller guarantees `values` satisfies the key and schema invariants.
    pub(crate) fn from_parts(values: BTreeMap<String, String>) -> Self {
        debug_assert!(validate_map(&values).is_valid());
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn catalog_name(&self) -> &str {
        self.get(keys::CATALOG_NAME).unwrap_or_default()
    }

    /// Environment implied by the catalog name.
    pub fn environment(&self) -> Environment {
        Environment::from_catalog(self.catalog_name()).unwrap_or_default()
    }

    pub fn schema(&self, tier: SchemaTier) -> &str {
        self.get(tier.schema_key()).unwrap_or_default()
    }

    /// Catalog-qualified schema name, e.g. `ecommerce_dev.gold`.
    pub fn full_schema(&self, tier: SchemaTier) -> &str {
        self.get(tier.full_schema_key()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Key/value pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.values
    }

    /// Render as `KEY=value` lines sorted by key.
    pub fn to_env_lines(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

impl Index<&str> for Configuration {
    type Output = str;

    /// Panics if `key` is not a configuration key.
    fn index(&self, key: &str) -> &str {
        match self.get(key) {
            Some(value) => value,
            None => panic!("unknown configuration key: {key}"),
        }
    }
}

impl TryFrom<BTreeMap<String, String>> for Configuration {
    type Error = Error;

    fn try_from(values: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let result = validate_map(&values);
        if result.is_valid() {
            Ok(Self { values })
        } else {
            Err(Error::InvalidConfig(result.to_string()))
        }
    }
}

impl From<Configuration> for BTreeMap<String, String> {
    fn from(config: Configuration) -> Self {
        config.values
    }
}

impl IntoIterator for Configuration {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
