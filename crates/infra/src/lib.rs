//! Infrastructure layer: hosted store client, notifications, config.

pub mod config;
pub mod notify;
pub mod record_store;

pub use config::StoreConfig;
pub use notify::{Notification, NotificationKind, Notifier, RecordingNotifier, TracingNotifier};
pub use record_store::{InMemoryRecordStore, MaybeSendSync, RecordStore, RestRecordStore, StoreError};
