//! `cottonwaste-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{FieldError, FieldErrorKind, FieldResult, ValidationErrors};
pub use id::UserId;
