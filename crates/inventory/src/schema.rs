//! Field schema for the inventory submission form.
//!
//! Each field maps to a plain validation function in a static rule table.
//! Raw values are always strings, exactly as typed; coercion to typed values
//! happens here and nowhere else.

use serde::{Deserialize, Serialize};

use cottonwaste_core::{FieldError, FieldResult, ValidationErrors};

use crate::{InventoryItem, WasteType};

/// Minimum number of characters accepted for `location`.
pub const MIN_LOCATION_LEN: usize = 3;

/// Identifier of a form field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    WasteType,
    Quantity,
    UnitPrice,
    Location,
    Description,
}

impl Field {
    /// Fields in the order they are rendered.
    pub const ALL: [Field; 5] = [
        Field::WasteType,
        Field::Quantity,
        Field::UnitPrice,
        Field::Location,
        Field::Description,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::WasteType => "waste_type",
            Field::Quantity => "quantity",
            Field::UnitPrice => "unit_price",
            Field::Location => "location",
            Field::Description => "description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::WasteType => "Waste Type",
            Field::Quantity => "Quantity (kg)",
            Field::UnitPrice => "Unit Price (₹/kg)",
            Field::Location => "Location",
            Field::Description => "Description (Optional)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::WasteType => "Select waste type",
            Field::Quantity => "Enter quantity",
            Field::UnitPrice => "Enter price per kg",
            Field::Location => "Enter location",
            Field::Description => "Enter description",
        }
    }

    /// Whether the input should be rendered as a numeric input.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Quantity | Field::UnitPrice)
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-field errors for the submission form.
pub type FormErrors = ValidationErrors<Field>;

/// Raw field values, as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub waste_type: String,
    pub quantity: String,
    pub unit_price: String,
    pub location: String,
    pub description: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            waste_type: WasteType::default().as_str().to_string(),
            quantity: String::new(),
            unit_price: String::new(),
            location: String::new(),
            description: String::new(),
        }
    }
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::WasteType => &self.waste_type,
            Field::Quantity => &self.quantity,
            Field::UnitPrice => &self.unit_price,
            Field::Location => &self.location,
            Field::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::WasteType => &mut self.waste_type,
            Field::Quantity => &mut self.quantity,
            Field::UnitPrice => &mut self.unit_price,
            Field::Location => &mut self.location,
            Field::Description => &mut self.description,
        };
        *slot = value.into();
    }
}

/// A single field after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    WasteType(WasteType),
    Number(f64),
    Text(String),
}

/// Validation function for one field.
pub type Rule = fn(&str) -> FieldResult<FieldValue>;

/// Field identifier → validation function.
pub const RULES: [(Field, Rule); 5] = [
    (Field::WasteType, waste_type_rule),
    (Field::Quantity, quantity_rule),
    (Field::UnitPrice, unit_price_rule),
    (Field::Location, location_rule),
    (Field::Description, description_rule),
];

/// `RULES` is laid out in `Field` declaration order.
pub fn rule_for(field: Field) -> Rule {
    RULES[field as usize].1
}

/// Validate and coerce one raw value.
pub fn validate_field(field: Field, raw: &str) -> FieldResult<FieldValue> {
    rule_for(field)(raw)
}

/// Validate a whole form.
///
/// Every field is checked, so the error map carries one entry per failing
/// field rather than stopping at the first.
pub fn validate(values: &FormValues) -> Result<InventoryItem, FormErrors> {
    let mut errors = FormErrors::new();

    let waste_type = collect(&mut errors, Field::WasteType, values);
    let quantity = collect(&mut errors, Field::Quantity, values);
    let unit_price = collect(&mut errors, Field::UnitPrice, values);
    let location = collect(&mut errors, Field::Location, values);
    let description = collect(&mut errors, Field::Description, values);

    match (waste_type, quantity, unit_price, location, description) {
        (
            Some(FieldValue::WasteType(waste_type)),
            Some(FieldValue::Number(quantity)),
            Some(FieldValue::Number(unit_price)),
            Some(FieldValue::Text(location)),
            Some(FieldValue::Text(description)),
        ) if errors.is_empty() => Ok(InventoryItem {
            waste_type,
            quantity,
            unit_price,
            location,
            description,
        }),
        _ => Err(errors),
    }
}

fn collect(errors: &mut FormErrors, field: Field, values: &FormValues) -> Option<FieldValue> {
    match validate_field(field, values.get(field)) {
        Ok(value) => Some(value),
        Err(e) => {
            errors.insert(field, e);
            None
        }
    }
}

fn waste_type_rule(raw: &str) -> FieldResult<FieldValue> {
    raw.parse::<WasteType>().map(FieldValue::WasteType).map_err(|_| {
        let expected = WasteType::ALL
            .iter()
            .map(|w| format!("'{}'", w.as_str()))
            .collect::<Vec<_>>()
            .join(" | ");
        FieldError::invalid_enum(format!(
            "Invalid waste type. Expected {expected}, received '{raw}'"
        ))
    })
}

fn quantity_rule(raw: &str) -> FieldResult<FieldValue> {
    positive_number(raw, "Quantity")
}

fn unit_price_rule(raw: &str) -> FieldResult<FieldValue> {
    positive_number(raw, "Unit price")
}

fn location_rule(raw: &str) -> FieldResult<FieldValue> {
    if raw.chars().count() < MIN_LOCATION_LEN {
        return Err(FieldError::too_short(format!(
            "Location must be at least {MIN_LOCATION_LEN} characters"
        )));
    }
    Ok(FieldValue::Text(raw.to_string()))
}

fn description_rule(raw: &str) -> FieldResult<FieldValue> {
    Ok(FieldValue::Text(raw.to_string()))
}

/// Presence check first, then coercion.
fn positive_number(raw: &str, label: &str) -> FieldResult<FieldValue> {
    if raw.is_empty() {
        return Err(FieldError::required(format!("{label} is required")));
    }
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FieldError::not_a_number(format!("{label} must be a number")))?;
    if value <= 0.0 {
        return Err(FieldError::not_positive(format!(
            "{label} must be greater than 0"
        )));
    }
    Ok(FieldValue::Number(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cottonwaste_core::FieldErrorKind;

    fn valid_values() -> FormValues {
        FormValues {
            waste_type: "yarn_waste".to_string(),
            quantity: "50".to_string(),
            unit_price: "12.5".to_string(),
            location: "Mumbai".to_string(),
            description: String::new(),
        }
    }

    fn kind_of(field: Field, raw: &str) -> Option<FieldErrorKind> {
        validate_field(field, raw).err().map(|e| e.kind)
    }

    #[test]
    fn rules_are_indexed_by_field() {
        for field in Field::ALL {
            assert_eq!(RULES[field as usize].0, field);
        }
    }

    #[test]
    fn all_waste_type_literals_pass() {
        for w in WasteType::ALL {
            assert_eq!(
                validate_field(Field::WasteType, w.as_str()),
                Ok(FieldValue::WasteType(w))
            );
        }
    }

    #[test]
    fn unknown_waste_type_is_invalid_enum() {
        assert_eq!(kind_of(Field::WasteType, "cotton"), Some(FieldErrorKind::InvalidEnum));
        assert_eq!(kind_of(Field::WasteType, ""), Some(FieldErrorKind::InvalidEnum));
    }

    #[test]
    fn location_boundary() {
        assert_eq!(kind_of(Field::Location, ""), Some(FieldErrorKind::TooShort));
        assert_eq!(kind_of(Field::Location, "ab"), Some(FieldErrorKind::TooShort));
        assert_eq!(kind_of(Field::Location, "abc"), None);
    }

    #[test]
    fn location_message_matches_form_copy() {
        let err = validate_field(Field::Location, "ab").unwrap_err();
        assert_eq!(err.message, "Location must be at least 3 characters");
    }

    #[test]
    fn location_counts_characters_not_bytes() {
        assert_eq!(kind_of(Field::Location, "पुण"), None);
        assert_eq!(kind_of(Field::Location, "पु"), Some(FieldErrorKind::TooShort));
    }

    #[test]
    fn empty_numbers_are_required() {
        assert_eq!(kind_of(Field::Quantity, ""), Some(FieldErrorKind::RequiredField));
        assert_eq!(kind_of(Field::UnitPrice, ""), Some(FieldErrorKind::RequiredField));
    }

    #[test]
    fn numeric_strings_coerce_to_their_parse() {
        assert_eq!(validate_field(Field::Quantity, "10"), Ok(FieldValue::Number(10.0)));
        assert_eq!(validate_field(Field::UnitPrice, "3.5"), Ok(FieldValue::Number(3.5)));
        assert_eq!(validate_field(Field::Quantity, " 7 "), Ok(FieldValue::Number(7.0)));
    }

    #[test]
    fn non_numeric_and_non_finite_are_rejected() {
        assert_eq!(kind_of(Field::Quantity, "ten"), Some(FieldErrorKind::NotANumber));
        assert_eq!(kind_of(Field::Quantity, "   "), Some(FieldErrorKind::NotANumber));
        assert_eq!(kind_of(Field::UnitPrice, "NaN"), Some(FieldErrorKind::NotANumber));
        assert_eq!(kind_of(Field::UnitPrice, "inf"), Some(FieldErrorKind::NotANumber));
    }

    #[test]
    fn zero_and_negative_are_rejected() {
        assert_eq!(kind_of(Field::Quantity, "0"), Some(FieldErrorKind::NotPositive));
        assert_eq!(kind_of(Field::UnitPrice, "-2"), Some(FieldErrorKind::NotPositive));
    }

    #[test]
    fn description_accepts_anything() {
        assert_eq!(kind_of(Field::Description, ""), None);
        assert_eq!(kind_of(Field::Description, "x"), None);
    }

    #[test]
    fn validate_builds_typed_item() {
        let item = validate(&valid_values()).unwrap();
        assert_eq!(item.waste_type, WasteType::YarnWaste);
        assert_eq!(item.quantity, 50.0);
        assert_eq!(item.unit_price, 12.5);
        assert_eq!(item.location, "Mumbai");
        assert_eq!(item.description, "");
    }

    #[test]
    fn validate_reports_every_failing_field() {
        let errors = validate(&FormValues::default()).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.kind(Field::Quantity), Some(FieldErrorKind::RequiredField));
        assert_eq!(errors.kind(Field::UnitPrice), Some(FieldErrorKind::RequiredField));
        assert_eq!(errors.kind(Field::Location), Some(FieldErrorKind::TooShort));
        assert!(errors.get(Field::WasteType).is_none());
    }

    #[test]
    fn form_values_get_set_by_field() {
        let mut values = FormValues::default();
        for field in Field::ALL {
            values.set(field, format!("v-{field}"));
        }
        for field in Field::ALL {
            assert_eq!(values.get(field), format!("v-{field}"));
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: anything outside the four literals is an enum error.
            #[test]
            fn non_literal_waste_type_fails(raw in "\\PC{0,20}") {
                prop_assume!(WasteType::ALL.iter().all(|w| w.as_str() != raw));
                prop_assert_eq!(kind_of(Field::WasteType, &raw), Some(FieldErrorKind::InvalidEnum));
            }

            /// Property: location passes exactly when it has at least three characters.
            #[test]
            fn location_length_decides(raw in "\\PC{0,12}") {
                let ok = raw.chars().count() >= MIN_LOCATION_LEN;
                prop_assert_eq!(validate_field(Field::Location, &raw).is_ok(), ok);
            }

            /// Property: positive decimals coerce to the same value `str::parse` gives.
            #[test]
            fn positive_decimals_coerce(n in 1u32..1_000_000, frac in 0u32..100) {
                let raw = format!("{n}.{frac:02}");
                let expected: f64 = raw.parse().unwrap();
                prop_assert_eq!(validate_field(Field::Quantity, &raw), Ok(FieldValue::Number(expected)));
            }
        }
    }
}
