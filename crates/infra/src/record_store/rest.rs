use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::Deserialize;

use cottonwaste_inventory::NewInventoryRecord;

use super::r#trait::{RecordStore, StoreError};
use crate::config::StoreConfig;

/// Record store backed by the hosted service's REST endpoint.
///
/// Inserts are a single `POST {base_url}/rest/v1/{table}` with a JSON array
/// body. No retries: a failure is reported once and left to the caller.
///
/// The access token can be swapped while the store is in use (sign-in,
/// token refresh); each request reads the token current at send time.
#[derive(Debug, Clone)]
pub struct RestRecordStore {
    client: reqwest::Client,
    config: StoreConfig,
    access_token: Arc<RwLock<Option<String>>>,
}

/// Error body returned by the REST endpoint on rejection.
#[derive(Debug, Deserialize)]
struct RestErrorBody {
    message: Option<String>,
}

impl RestRecordStore {
    pub fn new(config: StoreConfig) -> Self {
        let access_token = Arc::new(RwLock::new(config.access_token.clone()));
        Self {
            client: reqwest::Client::new(),
            config,
            access_token,
        }
    }

    pub fn from_env() -> Result<Self, StoreError> {
        Ok(Self::new(StoreConfig::from_env()?))
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Replace the user's access token; `None` falls back to the API key.
    pub fn set_access_token(&self, token: Option<String>) {
        if let Ok(mut current) = self.access_token.write() {
            *current = token;
        }
    }

    fn bearer_token(&self) -> String {
        self.access_token
            .read()
            .ok()
            .and_then(|t| t.clone())
            .unwrap_or_else(|| self.config.api_key.clone())
    }

    fn rejection_message(body: &str) -> String {
        serde_json::from_str::<RestErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.to_string())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RecordStore for RestRecordStore {
    async fn insert(&self, table: &str, records: &[NewInventoryRecord]) -> Result<(), StoreError> {
        let body =
            serde_json::to_vec(records).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let url = self.config.table_url(table);

        tracing::debug!(%url, rows = records.len(), "sending insert");

        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(self.bearer_token())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header("Prefer", "return=minimal")
            .body(body)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: Self::rejection_message(&text),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_prefers_json_message() {
        let body = r#"{"code":"23514","message":"new row violates check constraint"}"#;
        assert_eq!(
            RestRecordStore::rejection_message(body),
            "new row violates check constraint"
        );
        assert_eq!(RestRecordStore::rejection_message("Bad Gateway"), "Bad Gateway");
    }
}
