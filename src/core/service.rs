//! Ship operations: validation, rating and delegation to the repository

use std::sync::Arc;

use crate::core::error::{EntityError, RequestError, ShipyardResult, StorageError};
use crate::core::predicate::ShipSpecification;
use crate::core::query::{Page, PageRequest};
use crate::core::repository::ShipRepository;
use crate::core::ship::{NewShip, Ship, ShipPayload};
use crate::core::validation::{Operation, ShipValidator};

/// Orchestrates ship CRUD on top of a [`ShipRepository`]
///
/// The service holds no state of its own beyond the repository handle, so it
/// is cheap to clone and safe to share between concurrent requests. Edits are
/// last-writer-wins; any locking belongs in the repository.
#[derive(Clone)]
pub struct ShipService {
    repository: Arc<dyn ShipRepository>,
}

impl ShipService {
    pub fn new(repository: Arc<dyn ShipRepository>) -> Self {
        Self { repository }
    }

    /// Validate a full candidate, compute its rating and persist it
    pub async fn create(&self, payload: ShipPayload) -> ShipyardResult<Ship> {
        ShipValidator::validate(&payload, Operation::Create)?;
        let new_ship = NewShip::try_from(payload)?;

        let ship = self
            .repository
            .insert(new_ship)
            .await
            .map_err(StorageError::operation("insert"))?;

        tracing::info!(ship_id = ship.id, rating = ship.rating, "ship created");
        Ok(ship)
    }

    /// Apply the fields present in `patch` to an existing ship and re-rate it
    pub async fn edit(&self, id: i64, patch: ShipPayload) -> ShipyardResult<Ship> {
        ShipValidator::validate(&patch, Operation::Update)?;

        let existing = self.get(id).await?;
        let updated = existing.merged(&patch);

        let ship = self
            .repository
            .update(id, updated)
            .await
            .map_err(StorageError::operation("update"))?;

        tracing::info!(ship_id = ship.id, rating = ship.rating, "ship updated");
        Ok(ship)
    }

    pub async fn get(&self, id: i64) -> ShipyardResult<Ship> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(StorageError::operation("find_by_id"))?
            .ok_or_else(|| EntityError::NotFound { id }.into())
    }

    pub async fn delete(&self, id: i64) -> ShipyardResult<()> {
        let exists = self
            .repository
            .exists_by_id(id)
            .await
            .map_err(StorageError::operation("exists_by_id"))?;
        if !exists {
            return Err(EntityError::NotFound { id }.into());
        }

        self.repository
            .delete_by_id(id)
            .await
            .map_err(StorageError::operation("delete_by_id"))?;

        tracing::info!(ship_id = id, "ship deleted");
        Ok(())
    }

    /// Every ship matching the specification
    pub async fn list(&self, spec: &ShipSpecification) -> ShipyardResult<Vec<Ship>> {
        let ships = self
            .repository
            .find_all(spec)
            .await
            .map_err(StorageError::operation("find_all"))?;

        tracing::debug!(filters = spec.conditions().len(), matched = ships.len(), "listed ships");
        Ok(ships)
    }

    /// One page of the ships matching the specification
    pub async fn list_page(
        &self,
        spec: &ShipSpecification,
        page: &PageRequest,
    ) -> ShipyardResult<Page<Ship>> {
        let result = self
            .repository
            .find_page(spec, page)
            .await
            .map_err(StorageError::operation("find_page"))?;

        tracing::debug!(
            filters = spec.conditions().len(),
            page_number = page.page_number,
            page_size = page.page_size,
            total = result.pagination.total,
            "listed ship page"
        );
        Ok(result)
    }

    /// Number of ships matching the specification
    pub async fn count(&self, spec: &ShipSpecification) -> ShipyardResult<usize> {
        self.repository
            .count(spec)
            .await
            .map_err(StorageError::operation("count"))
    }

    /// Parse a ship id; only positive integers are accepted
    pub fn parse_id(text: &str) -> Result<i64, RequestError> {
        match text.parse::<i64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(RequestError::InvalidId {
                value: text.to_string(),
            }),
        }
    }
}
