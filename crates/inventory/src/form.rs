//! Form state controller: current raw values plus inline errors.

use cottonwaste_core::FieldError;

use crate::schema::{self, Field, FormErrors, FormValues};
use crate::InventoryItem;

/// In-memory state of one submission form.
///
/// Errors are only recorded for fields that were edited or validated
/// explicitly, so a fresh form reports `is_valid()` until the first edit
/// or submit attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: FormValues,
    errors: FormErrors,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Update one field and re-validate only that field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Option<&FieldError> {
        self.values.set(field, value);
        match schema::validate_field(field, self.values.get(field)) {
            Ok(_) => self.errors.clear(field),
            Err(e) => self.errors.insert(field, e),
        }
        self.errors.get(field)
    }

    /// Validate every field, replacing the error map with the outcome.
    pub fn validate_all(&mut self) -> Result<InventoryItem, FormErrors> {
        match schema::validate(&self.values) {
            Ok(item) => {
                self.errors.clear_all();
                Ok(item)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Back to defaults: `yarn_waste` and empty strings, no errors.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
