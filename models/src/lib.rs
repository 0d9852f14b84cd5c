// models/src/lib.rs
//
// Domain records for the facility administration service: one module per
// resource, the shared error types, and the canonical `Resource` trait
// the storage and HTTP layers are written against.

pub mod booking;
pub mod errors;
pub mod inventory;
pub mod maintenance;
pub mod member;
pub mod reservation;
pub mod resource;
pub mod room;
pub mod schedule;
pub mod staff;
pub mod time;
pub mod utility;

pub use booking::{Booking, NewBooking};
pub use errors::{StoreError, StoreResult, ValidationError, ValidationResult};
pub use inventory::{InventoryItem, NewInventoryItem};
pub use maintenance::MaintenanceRequest;
pub use member::Member;
pub use reservation::Reservation;
pub use resource::{DeleteSelector, Resource};
pub use room::Room;
pub use schedule::{NewShift, Shift};
pub use staff::Staff;
pub use time::{DayOfWeek, Interval, TimeOfDay};
pub use utility::UtilityRecord;
