use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use cottonwaste_inventory::NewInventoryRecord;

use super::r#trait::{RecordStore, StoreError};

/// In-memory record store.
///
/// Intended for tests/dev. Can be switched into a failing mode to exercise
/// the rejection path.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    tables: RwLock<HashMap<String, Vec<NewInventoryRecord>>>,
    requests: RwLock<usize>,
    failure: RwLock<Option<StoreError>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every insert with `error`.
    pub fn failing(error: StoreError) -> Self {
        let store = Self::default();
        store.set_failure(Some(error));
        store
    }

    /// Switch failure mode on (`Some`) or off (`None`).
    pub fn set_failure(&self, error: Option<StoreError>) {
        if let Ok(mut failure) = self.failure.write() {
            *failure = error;
        }
    }

    /// Rows stored in `table`, in insert order.
    pub fn inserted(&self, table: &str) -> Vec<NewInventoryRecord> {
        self.tables
            .read()
            .map(|t| t.get(table).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Number of insert calls received, including rejected ones.
    pub fn request_count(&self) -> usize {
        self.requests.read().map(|n| *n).unwrap_or(0)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RecordStore for InMemoryRecordStore {
    async fn insert(&self, table: &str, records: &[NewInventoryRecord]) -> Result<(), StoreError> {
        {
            let mut requests = self
                .requests
                .write()
                .map_err(|_| StoreError::Network("lock poisoned".to_string()))?;
            *requests += 1;
        }

        let failure = self
            .failure
            .read()
            .map_err(|_| StoreError::Network("lock poisoned".to_string()))?
            .clone();
        if let Some(err) = failure {
            return Err(err);
        }

        let mut tables = self
            .tables
            .write()
            .map_err(|_| StoreError::Network("lock poisoned".to_string()))?;
        tables
            .entry(table.to_string())
            .or_default()
            .extend_from_slice(records);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cottonwaste_inventory::WasteType;

    fn record(location: &str) -> NewInventoryRecord {
        NewInventoryRecord {
            waste_type: WasteType::ComberNoil,
            quantity: 120.0,
            unit_price: 30.0,
            location: location.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn insert_appends_per_table() {
        let store = InMemoryRecordStore::new();
        store.insert("inventory_items", &[record("Pune")]).await.unwrap();
        store.insert("inventory_items", &[record("Salem")]).await.unwrap();

        let rows = store.inserted("inventory_items");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].location, "Salem");
        assert!(store.inserted("other").is_empty());
        assert_eq!(store.request_count(), 2);
    }

    #[tokio::test]
    async fn failing_store_counts_but_keeps_nothing() {
        let store = InMemoryRecordStore::failing(StoreError::Network("down".to_string()));

        let err = store.insert("inventory_items", &[record("Pune")]).await.unwrap_err();
        assert_eq!(err, StoreError::Network("down".to_string()));
        assert_eq!(store.request_count(), 1);
        assert!(store.inserted("inventory_items").is_empty());

        store.set_failure(None);
        store.insert("inventory_items", &[record("Pune")]).await.unwrap();
        assert_eq!(store.inserted("inventory_items").len(), 1);
    }
}
