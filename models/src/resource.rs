// models/src/resource.rs

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{ValidationError, ValidationResult};

/// The canonical resource definition: one named collection of records
/// behind one generic CRUD surface. Every entity implements this once;
/// the storage layer and the HTTP handlers are written against the trait
/// and never duplicated per entity.
pub trait Resource: Clone + serde::Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name. Doubles as the storage tree the records live in.
    const COLLECTION: &'static str;

    /// The record's key within its collection.
    fn key(&self) -> String;

    /// Assigns server-side fields (generated ids) before a write.
    fn prepare(&mut self) {}

    /// Validates the record before any write path touches storage.
    fn validate(&self) -> ValidationResult<()> {
        Ok(())
    }

    /// Whether a delete selector matches this record.
    fn matches(&self, selector: &DeleteSelector) -> bool {
        selector.id.as_deref() == Some(self.key().as_str())
    }

    /// The wire representation of the record. Derived attributes that are
    /// never persisted (the inventory reorder flag) are added here.
    fn api_repr(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// The body of a DELETE request. The screens delete by whichever field
/// the page happened to key on (id, Room, Facility, Utility, Month), so
/// the selector carries each of them and every resource interprets the
/// ones it recognizes.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteSelector {
    pub id: Option<String>,
    pub item_id: Option<u64>,
    #[serde(rename = "Room")]
    pub room: Option<String>,
    #[serde(rename = "Facility")]
    pub facility: Option<String>,
    #[serde(rename = "Utility")]
    pub utility: Option<String>,
    #[serde(rename = "Month")]
    pub month: Option<String>,
}

impl DeleteSelector {
    pub fn by_id(id: impl Into<String>) -> Self {
        DeleteSelector {
            id: Some(id.into()),
            ..DeleteSelector::default()
        }
    }

    /// Rejects a selector that names no field at all; deleting with an
    /// empty body would otherwise match nothing and report success.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.id.is_none()
            && self.item_id.is_none()
            && self.room.is_none()
            && self.facility.is_none()
            && self.utility.is_none()
            && self.month.is_none()
        {
            return Err(ValidationError::EmptySelector);
        }
        Ok(())
    }
}

/// Required-field check shared by every entity: the screens submit all
/// fields as strings and treat an empty string as missing.
pub fn require_non_empty(fields: &[&str]) -> ValidationResult<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{DeleteSelector, require_non_empty};
    use crate::errors::ValidationError;

    #[test]
    fn empty_selector_is_rejected() {
        let selector = DeleteSelector::default();
        assert_eq!(selector.validate(), Err(ValidationError::EmptySelector));
    }

    #[test]
    fn selector_with_a_field_passes() {
        assert!(DeleteSelector::by_id("s-1").validate().is_ok());
    }

    #[test]
    fn blank_fields_are_missing() {
        assert_eq!(
            require_non_empty(&["ok", "  "]),
            Err(ValidationError::MissingFields)
        );
        assert!(require_non_empty(&["ok", "also ok"]).is_ok());
    }
}
