//! Configuration key names.
//!
//! Downstream jobs look values up by these exact strings.

pub const SCHEMA_BRONZE: &str = "SCHEMA_BRONZE";
pub const SCHEMA_SILVER: &str = "SCHEMA_SILVER";
pub const SCHEMA_GOLD: &str = "SCHEMA_GOLD";

pub const RAW_DATA_PATH_BASE: &str = "RAW_DATA_PATH_BASE";
pub const CHECKPOINT_PATH_BASE: &str = "CHECKPOINT_PATH_BASE";

pub const PATH_CUSTOMERS: &str = "PATH_CUSTOMERS";
pub const PATH_PRODUCTS: &str = "PATH_PRODUCTS";
pub const PATH_ORDERS: &str = "PATH_ORDERS";
pub const PATH_ORDER_ITEMS: &str = "PATH_ORDER_ITEMS";
pub const PATH_REVIEWS: &str = "PATH_REVIEWS";

pub const MODE_ORDERS: &str = "MODE_ORDERS";
pub const MODE_DEFAULT: &str = "MODE_DEFAULT";

pub const CATALOG_NAME: &str = "CATALOG_NAME";

pub const FULL_SCHEMA_BRONZE: &str = "FULL_SCHEMA_BRONZE";
pub const FULL_SCHEMA_SILVER: &str = "FULL_SCHEMA_SILVER";
pub const FULL_SCHEMA_GOLD: &str = "FULL_SCHEMA_GOLD";

/// Every key present in a built configuration, in insertion order.
pub const ALL_KEYS: [&str; 16] = [
    SCHEMA_BRONZE,
    SCHEMA_SILVER,
    SCHEMA_GOLD,
    RAW_DATA_PATH_BASE,
    CHECKPOINT_PATH_BASE,
    PATH_CUSTOMERS,
    PATH_PRODUCTS,
    PATH_ORDERS,
    PATH_ORDER_ITEMS,
    PATH_REVIEWS,
    MODE_ORDERS,
    MODE_DEFAULT,
    CATALOG_NAME,
    FULL_SCHEMA_BRONZE,
    FULL_SCHEMA_SILVER,
    FULL_SCHEMA_GOLD,
];

/// Whether `key` is one of [`ALL_KEYS`].
pub fn is_known(key: &str) -> bool {
    ALL_KEYS.contains(&key)
}
