//! Create-record boundary towards the hosted data store.

pub mod in_memory;
pub mod rest;
pub mod r#trait;

pub use in_memory::InMemoryRecordStore;
pub use rest::RestRecordStore;
pub use r#trait::{MaybeSendSync, RecordStore, StoreError};
