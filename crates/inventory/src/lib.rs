//! Inventory submission domain.
//!
//! This crate contains the cotton-waste record, the field schema that
//! validates raw form input, and the form state controller. Pure logic:
//! no IO, no HTTP, no storage.

pub mod form;
pub mod item;
pub mod schema;
pub mod waste_type;

pub use form::FormState;
pub use item::{InventoryItem, NewInventoryRecord};
pub use schema::{Field, FieldValue, FormErrors, FormValues, validate, validate_field};
pub use waste_type::{UnknownWasteType, WasteType};
