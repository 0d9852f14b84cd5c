// models/src/staff.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationResult;
use crate::resource::{Resource, require_non_empty};

/// A staff record as the staff screen stores it. Field names keep the
/// screen's camelCase so existing exports round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub role: String,
    pub qualifications: String,
    pub employment_type: String,
    pub remuneration: String,
    pub training: String,
}

impl Resource for Staff {
    const COLLECTION: &'static str = "staff";

    fn key(&self) -> String {
        self.id.clone()
    }

    fn prepare(&mut self) {
        if self.id.trim().is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }

    fn validate(&self) -> ValidationResult<()> {
        require_non_empty(&[
            &self.name,
            &self.role,
            &self.qualifications,
            &self.employment_type,
            &self.remuneration,
            &self.training,
        ])
    }
}
