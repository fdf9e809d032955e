//! Static storage layout shared by every environment.
//!
//! Only the catalog differs between environments; schema names, source
//! paths, and processing modes are fixed here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::keys;

/// Medallion schema tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaTier {
    /// Raw ingested data.
    Bronze,
    /// Cleaned, conformed data.
    Silver,
    /// Aggregated, consumption-ready data.
    Gold,
}

impl SchemaTier {
    pub const ALL: [SchemaTier; 3] = [SchemaTier::Bronze, SchemaTier::Silver, SchemaTier::Gold];

    /// Key holding the bare schema name.
    pub fn schema_key(self) -> &'static str {
        match self {
            SchemaTier::Bronze => keys::SCHEMA_BRONZE,
            SchemaTier::Silver => keys::SCHEMA_SILVER,
            SchemaTier::Gold => keys::SCHEMA_GOLD,
        }
    }

    /// Key holding the catalog-qualified schema name.
    pub fn full_schema_key(self) -> &'static str {
        match self {
            SchemaTier::Bronze => keys::FULL_SCHEMA_BRONZE,
            SchemaTier::Silver => keys::FULL_SCHEMA_SILVER,
            SchemaTier::Gold => keys::FULL_SCHEMA_GOLD,
        }
    }
}

impl fmt::Display for SchemaTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaTier::Bronze => write!(f, "bronze"),
            SchemaTier::Silver => write!(f, "silver"),
            SchemaTier::Gold => write!(f, "gold"),
        }
    }
}

/// How a source table is ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingMode {
    /// Incremental ingestion with checkpointing.
    Streaming,
    /// Full overwrite on each run.
    Batch,
}

impl ProcessingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessingMode::Streaming => "streaming",
            ProcessingMode::Batch => "batch",
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Environment-independent configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageLayout {
    pub schema_bronze: &'static str,
    pub schema_silver: &'static str,
    pub schema_gold: &'static str,

    /// Root of all raw source data.
    pub raw_data_path_base: &'static str,
    /// Root for streaming checkpoints; must be writeable by the pipeline.
    pub checkpoint_path_base: &'static str,

    pub path_customers: &'static str,
    pub path_products: &'static str,
    pub path_orders: &'static str,
    pub path_order_items: &'static str,
    pub path_reviews: &'static str,

    /// Orders arrive continuously and are streamed.
    pub mode_orders: ProcessingMode,
    /// Every other table is batch-overwritten.
    pub mode_default: ProcessingMode,
}

impl StorageLayout {
    pub const DEFAULT: StorageLayout = StorageLayout {
        schema_bronze: "bronze",
        schema_silver: "silver",
        schema_gold: "gold",
        raw_data_path_base: "abfss://adv@databrickspractice1.dfs.core.windows.net/",
        checkpoint_path_base:
            "abfss://managed@databrickspractice1.dfs.core.windows.net/checkpoints/",
        path_customers: "abfss://adv@databrickspractice1.dfs.core.windows.net/customers",
        path_products: "abfss://adv@databrickspractice1.dfs.core.windows.net/products",
        path_orders: "abfss://adv@databrickspractice1.dfs.core.windows.net/orders",
        path_order_items: "abfss://adv@databrickspractice1.dfs.core.windows.net/order_items",
        path_reviews: "abfss://adv@databrickspractice1.dfs.core.windows.net/product_reviews",
        mode_orders: ProcessingMode::Streaming,
        mode_default: ProcessingMode::Batch,
    };

    /// Bare schema name for a tier.
    pub fn schema(&self, tier: SchemaTier) -> &'static str {
        match tier {
            SchemaTier::Bronze => self.schema_bronze,
            SchemaTier::Silver => self.schema_silver,
            SchemaTier::Gold => self.schema_gold,
        }
    }

    /// Static key/value pairs, in key order of [`keys::ALL_KEYS`].
    pub fn entries(&self) -> [(&'static str, &'static str); 12] {
        [
            (keys::SCHEMA_BRONZE, self.schema_bronze),
            (keys::SCHEMA_SILVER, self.schema_silver),
            (keys::SCHEMA_GOLD, self.schema_gold),
            (keys::RAW_DATA_PATH_BASE, self.raw_data_path_base),
            (keys::CHECKPOINT_PATH_BASE, self.checkpoint_path_base),
            (keys::PATH_CUSTOMERS, self.path_customers),
            (keys::PATH_PRODUCTS, self.path_products),
            (keys::PATH_ORDERS, self.path_orders),
            (keys::PATH_ORDER_ITEMS, self.path_order_items),
            (keys::PATH_REVIEWS, self.path_reviews),
            (keys::MODE_ORDERS, self.mode_orders.as_str()),
            (keys::MODE_DEFAULT, self.mode_default.as_str()),
        ]
    }
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}
