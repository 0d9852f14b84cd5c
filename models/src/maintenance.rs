// models/src/maintenance.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationResult;
use crate::resource::{DeleteSelector, Resource, require_non_empty};

fn default_status() -> String {
    "Open".to_string()
}

/// A maintenance request against a room. Deleting by `Room` clears every
/// outstanding request for that room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "Room")]
    pub room: String,
    #[serde(rename = "Issue")]
    pub issue: String,
    #[serde(rename = "Priority", default)]
    pub priority: String,
    #[serde(rename = "Status", default = "default_status")]
    pub status: String,
}

impl Resource for MaintenanceRequest {
    const COLLECTION: &'static str = "maintenance";

    fn key(&self) -> String {
        self.id.clone()
    }

    fn prepare(&mut self) {
        if self.id.trim().is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }

    fn validate(&self) -> ValidationResult<()> {
        require_non_empty(&[&self.room, &self.issue])
    }

    fn matches(&self, selector: &DeleteSelector) -> bool {
        if let Some(id) = &selector.id {
            return &self.id == id;
        }
        if let Some(room) = &selector.room {
            return &self.room == room;
        }
        false
    }
}
