// models/src/utility.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ValidationError, ValidationResult};
use crate::resource::{DeleteSelector, Resource, require_non_empty};

/// A monthly utility reading. Deletes match on `Utility` (drop a meter
/// entirely) or `Month` (drop one billing period across meters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilityRecord {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "Utility")]
    pub utility: String,
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Usage", default)]
    pub usage: f64,
    #[serde(rename = "Cost", default)]
    pub cost: f64,
}

impl Resource for UtilityRecord {
    const COLLECTION: &'static str = "utilities";

    fn key(&self) -> String {
        self.id.clone()
    }

    fn prepare(&mut self) {
        if self.id.trim().is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }

    fn validate(&self) -> ValidationResult<()> {
        require_non_empty(&[&self.utility, &self.month])?;
        if !self.usage.is_finite() || self.usage < 0.0 {
            return Err(ValidationError::NegativeField("Usage"));
        }
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(ValidationError::NegativeField("Cost"));
        }
        Ok(())
    }

    fn matches(&self, selector: &DeleteSelector) -> bool {
        if let Some(id) = &selector.id {
            return &self.id == id;
        }
        match (&selector.utility, &selector.month) {
            (Some(utility), Some(month)) => &self.utility == utility && &self.month == month,
            (Some(utility), None) => &self.utility == utility,
            (None, Some(month)) => &self.month == month,
            (None, None) => false,
        }
    }
}
