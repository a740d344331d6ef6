use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of cotton waste being offered.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteType {
    #[default]
    YarnWaste,
    ComberNoil,
    FlatStrips,
    Other,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown waste type: {0:?}")]
pub struct UnknownWasteType(pub String);

impl WasteType {
    /// Select options, in display order.
    pub const ALL: [WasteType; 4] = [
        WasteType::YarnWaste,
        WasteType::ComberNoil,
        WasteType::FlatStrips,
        WasteType::Other,
    ];

    /// Literal stored in the `waste_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteType::YarnWaste => "yarn_waste",
            WasteType::ComberNoil => "comber_noil",
            WasteType::FlatStrips => "flat_strips",
            WasteType::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WasteType::YarnWaste => "Yarn Waste",
            WasteType::ComberNoil => "Comber Noil",
            WasteType::FlatStrips => "Flat Strips",
            WasteType::Other => "Other",
        }
    }
}

impl core::fmt::Display for WasteType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WasteType {
    type Err = UnknownWasteType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WasteType::ALL
            .into_iter()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| UnknownWasteType(s.to_string()))
    }
}
