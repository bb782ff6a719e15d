//! Repository contract for ship persistence

use crate::core::predicate::ShipSpecification;
use crate::core::query::{Page, PageRequest};
use crate::core::ship::{NewShip, Ship};
use anyhow::Result;
use async_trait::async_trait;

/// Storage collaborator for ships
///
/// Implementations own id assignment and the evaluation of
/// [`ShipSpecification`] predicates. The service layer never mutates stored
/// records in place: it reads a copy, changes it and hands it back through
/// [`update`](Self::update).
#[async_trait]
pub trait ShipRepository: Send + Sync {
    /// Get a ship by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Ship>>;

    /// Check whether a ship with this id exists
    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    /// Persist a new ship, assigning its id
    async fn insert(&self, ship: NewShip) -> Result<Ship>;

    /// Replace the stored ship with this id
    async fn update(&self, id: i64, ship: Ship) -> Result<Ship>;

    /// Remove the ship with this id
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// All ships matching the specification, ordered by id
    async fn find_all(&self, spec: &ShipSpecification) -> Result<Vec<Ship>>;

    /// One page of the ships matching the specification, with the total match count
    async fn find_page(&self, spec: &ShipSpecification, page: &PageRequest) -> Result<Page<Ship>>;

    /// Number of ships matching the specification
    async fn count(&self, spec: &ShipSpecification) -> Result<usize> {
        Ok(self.find_all(spec).await?.len())
    }
}
