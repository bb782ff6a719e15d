//! Router builder utilities for ship routes

use super::handlers::{
    ShipAppState, count_ships, create_ship, delete_ship, edit_ship, get_ship, health_check,
    list_ships,
};
use axum::{Router, routing::get};

/// Build ship routes
///
/// - GET /rest/ships - List one page of ships matching the filter
/// - POST /rest/ships - Create a ship
/// - GET /rest/ships/count - Count ships matching the filter
/// - GET /rest/ships/{id} - Get a ship
/// - POST /rest/ships/{id} - Edit a ship
/// - DELETE /rest/ships/{id} - Delete a ship
pub fn build_ship_routes(state: ShipAppState) -> Router {
    Router::new()
        .route("/rest/ships", get(list_ships).post(create_ship))
        .route("/rest/ships/count", get(count_ships))
        .route(
            "/rest/ships/{id}",
            get(get_ship).post(edit_ship).delete(delete_ship),
        )
        .with_state(state)
}

/// Build health check routes
pub fn build_health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}
