//! Field-level validation error model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used by field validators.
pub type FieldResult<T> = Result<T, FieldError>;

/// Why a single field was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// The value is not one of the enumerated literals.
    InvalidEnum,
    /// A required value was left empty.
    RequiredField,
    /// The value is shorter than the field's minimum length.
    TooShort,
    /// The value could not be coerced to a finite number.
    NotANumber,
    /// The value parsed, but is zero or negative.
    NotPositive,
}

impl FieldErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldErrorKind::InvalidEnum => "invalid_enum",
            FieldErrorKind::RequiredField => "required_field",
            FieldErrorKind::TooShort => "too_short",
            FieldErrorKind::NotANumber => "not_a_number",
            FieldErrorKind::NotPositive => "not_positive",
        }
    }
}

impl core::fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected field value, with the message shown next to the input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_enum(msg: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::InvalidEnum, msg)
    }

    pub fn required(msg: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::RequiredField, msg)
    }

    pub fn too_short(msg: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::TooShort, msg)
    }

    pub fn not_a_number(msg: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::NotANumber, msg)
    }

    pub fn not_positive(msg: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::NotPositive, msg)
    }
}

/// Per-field errors for a whole form, keyed by field identifier.
///
/// Iteration follows the field identifier's ordering so error lists render
/// in a stable order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors<F: Ord> {
    errors: BTreeMap<F, FieldError>,
}

impl<F: Ord> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> ValidationErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the error for `field`.
    pub fn insert(&mut self, field: F, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Drop any error recorded for `field`.
    pub fn clear(&mut self, field: F) {
        self.errors.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    pub fn get(&self, field: F) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn kind(&self, field: F) -> Option<FieldErrorKind> {
        self.get(field).map(|e| e.kind)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &FieldError)> {
        self.errors.iter().map(|(f, e)| (*f, e))
    }
}

impl<F: Ord + Copy + core::fmt::Display> core::fmt::Display for ValidationErrors<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (field, err) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {err}")?;
            first = false;
        }
        Ok(())
    }
}

impl<F> std::error::Error for ValidationErrors<F> where
    F: Ord + Copy + core::fmt::Display + core::fmt::Debug
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_insert_replaces_earlier_error() {
        let mut errors = ValidationErrors::new();
        errors.insert("quantity", FieldError::required("Quantity is required"));
        errors.insert("quantity", FieldError::not_a_number("Quantity must be a number"));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.kind("quantity"), Some(FieldErrorKind::NotANumber));
    }

    #[test]
    fn display_joins_fields_in_order() {
        let mut errors = ValidationErrors::new();
        errors.insert("b", FieldError::too_short("too short"));
        errors.insert("a", FieldError::required("required"));

        assert_eq!(errors.to_string(), "a: required; b: too short");
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&FieldErrorKind::InvalidEnum).unwrap();
        assert_eq!(json, "\"invalid_enum\"");
    }
}
