// rest_api/src/lib.rs

use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use models::inventory::InventoryItem;
use models::maintenance::MaintenanceRequest;
use models::member::Member;
use models::reservation::Reservation;
use models::room::Room;
use models::schedule::Shift;
use models::staff::Staff;
use models::utility::UtilityRecord;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::RestApiError;
pub use state::AppState;

use handlers::{
    booking_metrics, create, create_booking, create_inventory, create_schedule, delete, health,
    list, update_staff, version,
};

/// Builds the full application router. One generic handler set covers
/// the uniform resources; staff PUT, schedule POST, booking POST and
/// inventory POST are the non-uniform surfaces. The booking route only
/// registers POST, so any other method is answered with 405.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_origin(Any);

    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/version", get(version))
        .route(
            "/api/v1/staff",
            get(list::<Staff>)
                .post(create::<Staff>)
                .put(update_staff)
                .delete(delete::<Staff>),
        )
        .route(
            "/api/v1/rooms",
            get(list::<Room>).post(create::<Room>).delete(delete::<Room>),
        )
        .route(
            "/api/v1/reservations",
            get(list::<Reservation>)
                .post(create::<Reservation>)
                .delete(delete::<Reservation>),
        )
        .route(
            "/api/v1/maintenance",
            get(list::<MaintenanceRequest>)
                .post(create::<MaintenanceRequest>)
                .delete(delete::<MaintenanceRequest>),
        )
        .route(
            "/api/v1/utilities",
            get(list::<UtilityRecord>)
                .post(create::<UtilityRecord>)
                .delete(delete::<UtilityRecord>),
        )
        .route(
            "/api/v1/inventory",
            get(list::<InventoryItem>)
                .post(create_inventory)
                .delete(delete::<InventoryItem>),
        )
        .route(
            "/api/v1/members",
            get(list::<Member>)
                .post(create::<Member>)
                .delete(delete::<Member>),
        )
        .route(
            "/api/v1/schedules",
            get(list::<Shift>)
                .post(create_schedule)
                .delete(delete::<Shift>),
        )
        .route("/api/v1/bookings", post(create_booking))
        .route("/api/v1/bookings/metrics", get(booking_metrics))
        .with_state(state)
        .layer(cors)
}

/// Binds and serves the API until the shutdown receiver fires.
pub async fn start_server(
    host: &str,
    port: u16,
    state: AppState,
    shutdown_rx: oneshot::Receiver<()>,
) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", host, port))?;

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to address: {}", addr))?;

    info!("REST API server listening on {}", addr);

    axum::serve(listener, app(state).into_make_service())
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
            info!("received shutdown signal");
        })
        .await
        .context("REST API server failed")?;

    info!("REST API server stopped");
    Ok(())
}
