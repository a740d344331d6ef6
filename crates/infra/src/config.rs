//! Store connection settings.

use crate::record_store::StoreError;

pub const DEFAULT_TABLE: &str = "inventory_items";

pub const ENV_STORE_URL: &str = "COTTONWASTE_STORE_URL";
pub const ENV_STORE_KEY: &str = "COTTONWASTE_STORE_KEY";
pub const ENV_STORE_TABLE: &str = "COTTONWASTE_STORE_TABLE";

/// Where and how to reach the hosted data store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Project URL, without the `/rest/v1` suffix.
    pub base_url: String,
    /// Public (anon) API key sent with every request.
    pub api_key: String,
    /// Initial access token; the store falls back to `api_key` when absent.
    pub access_token: Option<String>,
    pub table: String,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            access_token: None,
            table: DEFAULT_TABLE.to_string(),
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StoreError> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| StoreError::Config(format!("{key} is not set")))
        };

        let mut config = Self::new(required(ENV_STORE_URL)?, required(ENV_STORE_KEY)?);
        if let Some(table) = lookup(ENV_STORE_TABLE).filter(|t| !t.trim().is_empty()) {
            config.table = table;
        }
        Ok(config)
    }

    /// Collection endpoint for `table`.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn loads_required_values_and_default_table() {
        let config = StoreConfig::from_lookup(lookup(&[
            (ENV_STORE_URL, "https://demo.example.co/"),
            (ENV_STORE_KEY, "anon"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://demo.example.co");
        assert_eq!(config.table, DEFAULT_TABLE);
        assert_eq!(
            config.table_url(&config.table),
            "https://demo.example.co/rest/v1/inventory_items"
        );
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let err = StoreConfig::from_lookup(lookup(&[(ENV_STORE_URL, "https://x")])).unwrap_err();
        assert_eq!(err, StoreError::Config(format!("{ENV_STORE_KEY} is not set")));
    }

    #[test]
    fn table_override_and_access_token() {
        let config = StoreConfig::from_lookup(lookup(&[
            (ENV_STORE_URL, "https://x"),
            (ENV_STORE_KEY, "anon"),
            (ENV_STORE_TABLE, "staging_items"),
        ]))
        .unwrap();
        assert_eq!(config.table, "staging_items");
        assert_eq!(config.access_token, None);

        let config = config.with_access_token("user-jwt");
        assert_eq!(config.access_token.as_deref(), Some("user-jwt"));
    }
}
