// rest_api/src/handlers.rs

use std::collections::HashMap;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};
use tracing::info;

use models::booking::find_conflict as find_booking_conflict;
use models::inventory::{InventoryItem, NewInventoryItem};
use models::resource::{DeleteSelector, Resource};
use models::schedule::find_conflict as find_shift_conflict;
use models::schedule::{NewShift, Shift};
use models::staff::Staff;
use models::{Booking, NewBooking};

use crate::error::RestApiError;
use crate::state::AppState;

const SCHEDULE_CONFLICT: &str =
    "This schedule conflicts with an existing shift for this staff member.";
const BOOKING_CONFLICT: &str =
    "This booking conflicts with an existing booking for this staff member.";

// Handler for the /api/v1/health endpoint
pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "message": "facility admin API is healthy" })),
    )
}

// Handler for the /api/v1/version endpoint
pub async fn version() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "version": env!("CARGO_PKG_VERSION"), "api_level": 1 })),
    )
}

/// GET on any resource: the entire collection as a JSON array.
pub async fn list<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<Value>, RestApiError> {
    let records: Vec<R> = state.store.all().await?;
    let out: Vec<Value> = records.iter().map(R::api_repr).collect();
    Ok(Json(Value::Array(out)))
}

/// POST on a uniform resource: validate, assign server-side fields,
/// append, return the stored record with 201.
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Json(mut record): Json<R>,
) -> Result<(StatusCode, Json<Value>), RestApiError> {
    record.prepare();
    record.validate()?;
    state.store.put(&record).await?;
    info!(collection = R::COLLECTION, key = %record.key(), "record created");
    Ok((StatusCode::CREATED, Json(record.api_repr())))
}

/// DELETE on any resource: the body names the selector (id or a domain
/// field); every matching record is removed.
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Json(selector): Json<DeleteSelector>,
) -> Result<Json<Value>, RestApiError> {
    selector.validate()?;
    let removed = state.store.delete_matching::<R>(&selector).await?;
    info!(collection = R::COLLECTION, removed, "records deleted");
    Ok(Json(
        json!({ "message": "Deleted successfully", "removed": removed }),
    ))
}

/// PUT /api/v1/staff: replace a staff record matched by id.
pub async fn update_staff(
    State(state): State<AppState>,
    Json(staff): Json<Staff>,
) -> Result<Json<Value>, RestApiError> {
    staff.validate()?;
    match state.store.replace(&staff).await {
        Ok(()) => Ok(Json(json!({ "message": "Updated successfully" }))),
        Err(models::StoreError::NotFound(_)) => {
            Err(RestApiError::NotFound("Staff not found".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /api/v1/schedules: validate the submitted shift, then run the
/// overlap check against the staff member's existing roster before
/// storing. The lock keeps scan and insert from interleaving with a
/// concurrent submission.
pub async fn create_schedule(
    State(state): State<AppState>,
    Json(new): Json<NewShift>,
) -> Result<(StatusCode, Json<Value>), RestApiError> {
    let shift = Shift::from_new(new)?;

    let _guard = state.schedule_lock.lock().await;
    let existing: Vec<Shift> = state.store.all().await?;
    if let Some(conflict) = find_shift_conflict(&shift, &existing) {
        info!(staff_id = %shift.staff_id, day = %shift.day, conflicting = %conflict.id,
              "schedule rejected: overlap");
        return Err(RestApiError::Conflict(SCHEDULE_CONFLICT.to_string()));
    }
    state.store.put(&shift).await?;
    Ok((StatusCode::CREATED, Json(shift.api_repr())))
}

/// POST /api/v1/bookings: same shape as the schedule path, keyed on
/// (staff, date) instead of (staffId, day).
pub async fn create_booking(
    State(state): State<AppState>,
    Json(new): Json<NewBooking>,
) -> Result<(StatusCode, Json<Value>), RestApiError> {
    let booking = Booking::from_new(new)?;

    let _guard = state.booking_lock.lock().await;
    let existing: Vec<Booking> = state.store.all().await?;
    if find_booking_conflict(&booking, &existing).is_some() {
        return Err(RestApiError::Conflict(BOOKING_CONFLICT.to_string()));
    }
    state.store.put(&booking).await?;
    Ok((StatusCode::CREATED, Json(booking.api_repr())))
}

/// GET /api/v1/bookings/metrics: per-service booking count and mean
/// duration in minutes, derived on read.
pub async fn booking_metrics(
    State(state): State<AppState>,
) -> Result<Json<Value>, RestApiError> {
    let bookings: Vec<Booking> = state.store.all().await?;

    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut totals: HashMap<String, u64> = HashMap::new();
    for booking in &bookings {
        *counts.entry(booking.service.clone()).or_default() += 1;
        *totals.entry(booking.service.clone()).or_default() += u64::from(booking.duration);
    }

    let averages: HashMap<String, f64> = totals
        .iter()
        .map(|(service, total)| {
            let count = counts.get(service).copied().unwrap_or(1);
            (service.clone(), *total as f64 / count as f64)
        })
        .collect();

    Ok(Json(json!({
        "serviceCount": counts,
        "averageDuration": averages,
    })))
}

/// POST /api/v1/inventory: id assignment (max existing + 1) and the
/// derived reorder flag both happen server-side, so creation is not the
/// generic path.
pub async fn create_inventory(
    State(state): State<AppState>,
    Json(new): Json<NewInventoryItem>,
) -> Result<(StatusCode, Json<Value>), RestApiError> {
    let _guard = state.inventory_lock.lock().await;
    let items: Vec<InventoryItem> = state.store.all().await?;
    let next_id = items.iter().map(|i| i.item_id).max().unwrap_or(0) + 1;

    let item = InventoryItem::from_new(new, next_id);
    item.validate()?;
    state.store.put(&item).await?;
    Ok((StatusCode::CREATED, Json(item.api_repr())))
}
