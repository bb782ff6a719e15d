//! HTTP handlers for ship operations
//!
//! Handlers only translate between HTTP and [`ShipService`]; every rule lives
//! in the core.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::config::PagingConfig;
use crate::core::error::{RequestError, ShipyardResult};
use crate::core::predicate::{ShipFilter, ShipSpecification};
use crate::core::query::PageParams;
use crate::core::service::ShipService;
use crate::core::ship::{Ship, ShipPayload};

/// Application state shared across handlers
#[derive(Clone)]
pub struct ShipAppState {
    pub service: ShipService,
    pub paging: PagingConfig,
}

/// List one page of ships matching the filter
///
/// GET /rest/ships?name=..&minSpeed=..&order=SPEED&pageNumber=0&pageSize=3
pub async fn list_ships(
    State(state): State<ShipAppState>,
    filter: Result<Query<ShipFilter>, QueryRejection>,
    page: Result<Query<PageParams>, QueryRejection>,
) -> ShipyardResult<Json<Vec<Ship>>> {
    let Query(filter) = filter.map_err(malformed_query)?;
    let Query(page) = page.map_err(malformed_query)?;

    let spec = filter.to_specification()?;
    let request = page.to_page_request(state.paging.default_page_size, state.paging.max_page_size);

    let result = state.service.list_page(&spec, &request).await?;
    Ok(Json(result.data))
}

/// Count ships matching the filter
///
/// GET /rest/ships/count?planet=..
pub async fn count_ships(
    State(state): State<ShipAppState>,
    filter: Result<Query<ShipFilter>, QueryRejection>,
) -> ShipyardResult<Json<usize>> {
    let Query(filter) = filter.map_err(malformed_query)?;
    let spec: ShipSpecification = filter.to_specification()?;

    Ok(Json(state.service.count(&spec).await?))
}

/// Create a ship
///
/// POST /rest/ships
pub async fn create_ship(
    State(state): State<ShipAppState>,
    payload: Result<Json<ShipPayload>, JsonRejection>,
) -> ShipyardResult<Json<Ship>> {
    let Json(payload) = payload.map_err(malformed_body)?;
    Ok(Json(state.service.create(payload).await?))
}

/// Get a ship by id
///
/// GET /rest/ships/{id}
pub async fn get_ship(
    State(state): State<ShipAppState>,
    Path(id): Path<String>,
) -> ShipyardResult<Json<Ship>> {
    let id = ShipService::parse_id(&id)?;
    Ok(Json(state.service.get(id).await?))
}

/// Apply a partial update to a ship
///
/// POST /rest/ships/{id}
pub async fn edit_ship(
    State(state): State<ShipAppState>,
    Path(id): Path<String>,
    payload: Result<Json<ShipPayload>, JsonRejection>,
) -> ShipyardResult<Json<Ship>> {
    let id = ShipService::parse_id(&id)?;
    let Json(patch) = payload.map_err(malformed_body)?;
    Ok(Json(state.service.edit(id, patch).await?))
}

/// Delete a ship
///
/// DELETE /rest/ships/{id}
pub async fn delete_ship(
    State(state): State<ShipAppState>,
    Path(id): Path<String>,
) -> ShipyardResult<StatusCode> {
    let id = ShipService::parse_id(&id)?;
    state.service.delete(id).await?;
    Ok(StatusCode::OK)
}

/// Liveness probe
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "shipyard"
    }))
}

fn malformed_query(rejection: QueryRejection) -> RequestError {
    RequestError::Malformed {
        message: rejection.body_text(),
    }
}

fn malformed_body(rejection: JsonRejection) -> RequestError {
    RequestError::Malformed {
        message: rejection.body_text(),
    }
}
