//! Deployment environments and their target catalogs.
//!
//! Label resolution is permissive: anything other than exactly `"prod"` or
//! `"staging"` resolves to [`Environment::Dev`]. Use [`Environment::recognize`]
//! or the strict [`FromStr`] impl when a caller needs to tell the difference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use ep_common::Error;

/// Target deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Staging,
    Prod,
}

impl Environment {
    /// All environments, default first.
    pub const ALL: [Environment; 3] = [Environment::Dev, Environment::Staging, Environment::Prod];

    /// Exact-match lookup of a recognized label.
    pub fn recognize(label: &str) -> Option<Self> {
        match label {
            "dev" => Some(Environment::Dev),
            "staging" => Some(Environment::Staging),
            "prod" => Some(Environment::Prod),
            _ => None,
        }
    }

    /// Resolve any label, falling back to `Dev` for unrecognized input.
    pub fn from_label(label: &str) -> Self {
        Self::recognize(label).unwrap_or_default()
    }

    /// Resolve an optional label; an absent label is `Dev`.
    pub fn from_optional_label(label: Option<&str>) -> Self {
        label.map(Self::from_label).unwrap_or_default()
    }

    /// Canonical label.
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        }
    }

    /// Catalog that holds this environment's schemas.
    pub fn catalog_name(self) -> &'static str {
        match self {
            Environment::Prod => "ecommerce_prod",
            Environment::Staging => "ecommerce_staging",
            Environment::Dev => "ecommerce_dev",
        }
    }

    /// Reverse lookup from a catalog name.
    pub fn from_catalog(catalog: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|env| env.catalog_name() == catalog)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::recognize(s).ok_or_else(|| Error::UnknownEnvironment {
            label: s.to_string(),
        })
    }
}
