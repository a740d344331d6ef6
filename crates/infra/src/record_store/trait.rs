use async_trait::async_trait;
use thiserror::Error;

use cottonwaste_inventory::NewInventoryRecord;

/// `Send + Sync` on native targets, nothing on wasm32.
///
/// Browser futures (fetch, timers) are `!Send`, so the front-end build drops
/// the thread-safety bounds the native build relies on.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSendSync: Send + Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync + ?Sized> MaybeSendSync for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSendSync {}
#[cfg(target_arch = "wasm32")]
impl<T: ?Sized> MaybeSendSync for T {}

/// Failure of a create request.
///
/// These are infrastructure errors (network, rejection by the hosted store,
/// configuration) as opposed to field validation errors, which never reach
/// the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),

    #[error("store rejected insert ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("store configuration error: {0}")]
    Config(String),
}

/// Create-record call against the hosted data store.
///
/// One call is one insert request; implementations never retry, queue, or
/// split the batch.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait RecordStore: MaybeSendSync {
    /// Insert `records` into `table`.
    async fn insert(&self, table: &str, records: &[NewInventoryRecord]) -> Result<(), StoreError>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<S> RecordStore for std::sync::Arc<S>
where
    S: RecordStore + ?Sized,
{
    async fn insert(&self, table: &str, records: &[NewInventoryRecord]) -> Result<(), StoreError> {
        (**self).insert(table, records).await
    }
}
