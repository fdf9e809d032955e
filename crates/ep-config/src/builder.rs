//! Builds a [`Configuration`] for an environment.

use std::collections::BTreeMap;

use crate::configuration::Configuration;
use crate::environment::Environment;
use crate::keys;
use crate::layout::{SchemaTier, StorageLayout};
use crate::SCHEMA_SEPARATOR;

/// Combines a static [`StorageLayout`] with an environment's catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigBuilder {
    layout: StorageLayout,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: StorageLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }

    /// Static entries, then `CATALOG_NAME`, then one `FULL_SCHEMA_*` per tier.
    pub fn build(&self, env: Environment) -> Configuration {
        let mut values: BTreeMap<String, String> = self
            .layout
            .entries()
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        let catalog = env.catalog_name();
        values.insert(keys::CATALOG_NAME.to_string(), catalog.to_string());

        for tier in SchemaTier::ALL {
            values.insert(
                tier.full_schema_key().to_string(),
                qualify(catalog, self.layout.schema(tier)),
            );
        }

        Configuration::from_parts(values)
    }
}

/// `catalog.schema`
pub fn qualify(catalog: &str, schema: &str) -> String {
    format!("{catalog}{SCHEMA_SEPARATOR}{schema}")
}

/// Build the configuration for an environment label.
///
/// `"prod"` and `"staging"` select their catalogs; every other label,
/// including typos and the empty string, gets the dev catalog.
pub fn get_config(env: &str) -> Configuration {
    get_config_for(Environment::from_label(env))
}

/// Build the configuration for an already-resolved environment.
pub fn get_config_for(env: Environment) -> Configuration {
    ConfigBuilder::default().build(env)
}
