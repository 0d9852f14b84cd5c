// models/src/reservation.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationResult;
use crate::resource::{DeleteSelector, Resource, require_non_empty};

/// A facility reservation. The reservation screen deletes by `Facility`,
/// clearing every reservation held against that facility at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "Facility")]
    pub facility: String,
    #[serde(rename = "Member")]
    pub member: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
}

impl Resource for Reservation {
    const COLLECTION: &'static str = "reservations";

    fn key(&self) -> String {
        self.id.clone()
    }

    fn prepare(&mut self) {
        if self.id.trim().is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }

    fn validate(&self) -> ValidationResult<()> {
        require_non_empty(&[&self.facility, &self.member, &self.date])
    }

    fn matches(&self, selector: &DeleteSelector) -> bool {
        if let Some(id) = &selector.id {
            return &self.id == id;
        }
        if let Some(facility) = &selector.facility {
            return &self.facility == facility;
        }
        false
    }
}
