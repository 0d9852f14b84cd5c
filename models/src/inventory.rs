// models/src/inventory.rs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ValidationError, ValidationResult};
use crate::resource::{DeleteSelector, Resource};

static SKU_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{3,10}$").expect("SKU pattern is valid"));

pub const CATEGORIES: [&str; 6] = [
    "Cleaning",
    "PPE",
    "Stationary",
    "Medicine",
    "Incontinence",
    "Other",
];

pub const UNITS: [&str; 3] = ["Each", "Box", "Case"];

/// A stocked inventory item as persisted. The reorder flag is NOT a
/// field here: it is derived from `qty_in_stock` and `threshold` on
/// every read, so it can never drift from its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub item_id: u64,
    pub sku: String,
    pub prod_name: String,
    pub category: String,
    pub unit: String,
    pub size: f64,
    pub par_level: i64,
    pub qty_in_stock: i64,
    pub threshold: i64,
}

/// The create payload: everything except the server-assigned `item_id`.
/// A `re_order` value sent by a client is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NewInventoryItem {
    pub sku: String,
    pub prod_name: String,
    pub category: String,
    pub unit: String,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub par_level: i64,
    #[serde(default)]
    pub qty_in_stock: i64,
    #[serde(default)]
    pub threshold: i64,
}

impl InventoryItem {
    /// Builds a stored item from a create payload and the id the store
    /// assigned (max existing id + 1, as the inventory screen numbers
    /// them).
    pub fn from_new(new: NewInventoryItem, item_id: u64) -> Self {
        InventoryItem {
            item_id,
            sku: new.sku,
            prod_name: new.prod_name,
            category: new.category,
            unit: new.unit,
            size: new.size,
            par_level: new.par_level,
            qty_in_stock: new.qty_in_stock,
            threshold: new.threshold,
        }
    }

    /// The reorder rule: restock once stock is at or below the threshold.
    pub fn needs_reorder(&self) -> bool {
        self.qty_in_stock <= self.threshold
    }
}

impl Resource for InventoryItem {
    const COLLECTION: &'static str = "inventory";

    fn key(&self) -> String {
        self.item_id.to_string()
    }

    fn validate(&self) -> ValidationResult<()> {
        if !SKU_RE.is_match(&self.sku) {
            return Err(ValidationError::InvalidSku);
        }
        if self.prod_name.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !CATEGORIES.contains(&self.category.as_str()) {
            return Err(ValidationError::InvalidCategory(self.category.clone()));
        }
        if !UNITS.contains(&self.unit.as_str()) {
            return Err(ValidationError::InvalidUnit(self.unit.clone()));
        }
        if !(self.size > 0.0) {
            return Err(ValidationError::NonPositiveSize);
        }
        if self.par_level < 0 {
            return Err(ValidationError::NegativeField("Par Level"));
        }
        if self.qty_in_stock < 0 {
            return Err(ValidationError::NegativeField("Quantity in Stock"));
        }
        if self.threshold < 0 {
            return Err(ValidationError::NegativeField("Threshold"));
        }
        Ok(())
    }

    fn matches(&self, selector: &DeleteSelector) -> bool {
        if let Some(item_id) = selector.item_id {
            return self.item_id == item_id;
        }
        if let Some(id) = &selector.id {
            return id.parse::<u64>() == Ok(self.item_id);
        }
        false
    }

    fn api_repr(&self) -> Value {
        let mut value = serde_json::to_value(self).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut value {
            map.insert("re_order".to_string(), Value::Bool(self.needs_reorder()));
        }
        value
    }
}
