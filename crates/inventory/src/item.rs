use serde::{Deserialize, Serialize};

use crate::WasteType;

/// A fully validated submission, ready to be sent to the store.
///
/// `description` keeps whatever was typed (possibly empty); turning an empty
/// description into `null` happens in [`InventoryItem::to_record`].
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub waste_type: WasteType,
    /// Kilograms.
    pub quantity: f64,
    /// Currency per kilogram.
    pub unit_price: f64,
    pub location: String,
    pub description: String,
}

impl InventoryItem {
    /// Build the row sent with the create request.
    pub fn to_record(&self) -> NewInventoryRecord {
        NewInventoryRecord {
            waste_type: self.waste_type,
            quantity: self.quantity,
            unit_price: self.unit_price,
            location: self.location.clone(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
        }
    }
}

/// Insert payload for the `inventory_items` table.
///
/// A missing description is serialized as an explicit `null`, not omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInventoryRecord {
    pub waste_type: WasteType,
    pub quantity: f64,
    pub unit_price: f64,
    pub location: String,
    pub description: Option<String>,
}
