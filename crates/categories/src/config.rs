//! Catalog configuration.

use anyhow::{Context, bail};

/// Environment variable holding the default stock group.
pub const DEFAULT_STOCK_GROUP_VAR: &str = "ASSISTANCE_DEFAULT_STOCK_GROUP";

const FALLBACK_STOCK_GROUP: &str = "1234";

/// Settings used by the category use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Stock group given to categories created without an explicit one.
    pub default_stock_group: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_stock_group: FALLBACK_STOCK_GROUP.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Load from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables; unset variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(DEFAULT_STOCK_GROUP_VAR) {
            config.default_stock_group = parse_stock_group(&raw)
                .with_context(|| format!("invalid {DEFAULT_STOCK_GROUP_VAR}"))?;
        }

        Ok(config)
    }
}

fn parse_stock_group(raw: &str) -> anyhow::Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        bail!("stock group must not be blank");
    }
    Ok(value.to_string())
}
