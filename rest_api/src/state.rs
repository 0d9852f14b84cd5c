// rest_api/src/state.rs

use std::sync::Arc;

use tokio::sync::Mutex;

use storage::{ResourceStore, StorageEngine};

/// Shared state for the axum application. The per-collection locks
/// serialize the check-then-insert sections (schedule and booking
/// conflict checks, inventory id assignment) so two concurrent writers
/// cannot interleave between scan and insert.
#[derive(Clone)]
pub struct AppState {
    pub store: ResourceStore,
    pub schedule_lock: Arc<Mutex<()>>,
    pub booking_lock: Arc<Mutex<()>>,
    pub inventory_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(engine: Arc<dyn StorageEngine>) -> Self {
        AppState {
            store: ResourceStore::new(engine),
            schedule_lock: Arc::new(Mutex::new(())),
            booking_lock: Arc::new(Mutex::new(())),
            inventory_lock: Arc::new(Mutex::new(())),
        }
    }
}
