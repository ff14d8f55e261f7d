//! Process configuration, read once at cold start.

use thiserror::Error;

/// Environment variable holding the products table name.
pub const PRODUCTS_TABLE_VAR: &str = "PRODUCTS_DDB";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup(PRODUCTS_TABLE_VAR)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(PRODUCTS_TABLE_VAR))?;

        Ok(Self { table_name })
    }
}
