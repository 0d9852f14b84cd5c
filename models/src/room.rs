// models/src/room.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationResult;
use crate::resource::{DeleteSelector, Resource, require_non_empty};

/// A room record. The room screen capitalizes its field names and leaves
/// `Occupant` blank for vacant rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "Room")]
    pub room: String,
    #[serde(rename = "Availability")]
    pub availability: String,
    #[serde(rename = "Occupant", default)]
    pub occupant: String,
}

impl Resource for Room {
    const COLLECTION: &'static str = "rooms";

    fn key(&self) -> String {
        self.id.clone()
    }

    fn prepare(&mut self) {
        if self.id.trim().is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }

    fn validate(&self) -> ValidationResult<()> {
        require_non_empty(&[&self.room, &self.availability])
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
