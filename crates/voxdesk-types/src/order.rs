//! Coffee order record.
//!
//! An `OrderRecord` starts empty and is filled in field by field as the
//! customer speaks. It is complete once the drink type, size, milk and the
//! name for the cup are known; extras are never required.

use serde::{Deserialize, Serialize};

/// The required fields of an order, in the order they are reported missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderField {
    #[serde(rename = "drinkType")]
    DrinkType,
    #[serde(rename = "size")]
    Size,
    #[serde(rename = "milk")]
    Milk,
    #[serde(rename = "name")]
    Name,
}

impl OrderField {
    /// All required fields in reporting order.
    pub const REQUIRED: [OrderField; 4] = [Self::DrinkType, Self::Size, Self::Milk, Self::Name];

    /// Returns the JSON key for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DrinkType => "drinkType",
            Self::Size => "size",
            Self::Milk => "milk",
            Self::Name => "name",
        }
    }
}

impl std::fmt::Display for OrderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A partially or fully specified coffee order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "drinkType")]
    pub drink_type: Option<String>,
    pub size: Option<String>,
    pub milk: Option<String>,
    #[serde(default)]
    pub extras: Vec<String>,
    pub name: Option<String>,
}

impl OrderRecord {
    /// Returns whether the given required field has been set.
    pub fn has(&self, field: OrderField) -> bool {
        match field {
            OrderField::DrinkType => self.drink_type.is_some(),
            OrderField::Size => self.size.is_some(),
            OrderField::Milk => self.milk.is_some(),
            OrderField::Name => self.name.is_some(),
        }
    }

    /// Required fields that are still unset, in reporting order.
    pub fn missing_fields(&self) -> Vec<OrderField> {
        OrderField::REQUIRED
            .into_iter()
            .filter(|field| !self.has(*field))
            .collect()
    }

    /// True once drink type, size, milk and name are all set.
    pub fn is_complete(&self) -> bool {
        OrderField::REQUIRED.iter().all(|field| self.has(*field))
    }
}
