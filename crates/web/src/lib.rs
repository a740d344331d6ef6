//! `cottonwaste-web`
//!
//! **Responsibility:** the inventory submission page.
//!
//! This crate provides:
//! - The submission handler (validate, one create request, notify)
//! - The page shell that gates the form behind a signed-in user
//! - A Leptos front-end rendering both (wasm32 only)
//!
//! Persistence and authentication stay with the hosted service; this crate
//! is a **thin shell** around it.

pub mod page;
pub mod submission;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use page::{PageShell, PageView};
pub use submission::{InventorySubmissionForm, SubmissionError, SubmitOutcome};
