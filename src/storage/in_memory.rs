//! In-memory implementation of ShipRepository for testing and development

use crate::core::predicate::ShipSpecification;
use crate::core::query::{Page, PageRequest};
use crate::core::repository::ShipRepository;
use crate::core::ship::{NewShip, Ship};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// In-memory ship repository
///
/// Ids come from a monotonically increasing sequence starting at 1 and are
/// never reused. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryShipRepository {
    table: Arc<RwLock<ShipTable>>,
}

struct ShipTable {
    ships: BTreeMap<i64, Ship>,
    next_id: i64,
}

impl InMemoryShipRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(ShipTable {
                ships: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Number of stored ships
    pub fn len(&self) -> usize {
        self.table.read().map(|t| t.ships.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn matching(&self, spec: &ShipSpecification) -> Result<Vec<Ship>> {
        let table = self
            .table
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(table
            .ships
            .values()
            .filter(|ship| spec.matches(ship))
            .cloned()
            .collect())
    }
}

impl Default for InMemoryShipRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShipRepository for InMemoryShipRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Ship>> {
        let table = self
            .table
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(table.ships.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let table = self
            .table
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(table.ships.contains_key(&id))
    }

    async fn insert(&self, ship: NewShip) -> Result<Ship> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = table.next_id;
        table.next_id += 1;

        let ship = Ship::from_new(id, ship);
        table.ships.insert(id, ship.clone());

        Ok(ship)
    }

    async fn update(&self, id: i64, ship: Ship) -> Result<Ship> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let stored = table
            .ships
            .get_mut(&id)
            .ok_or_else(|| anyhow!("Ship {} not found", id))?;

        *stored = Ship { id, ..ship };

        Ok(stored.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        table.ships.remove(&id);

        Ok(())
    }

    async fn find_all(&self, spec: &ShipSpecification) -> Result<Vec<Ship>> {
        self.matching(spec)
    }

    async fn find_page(&self, spec: &ShipSpecification, page: &PageRequest) -> Result<Page<Ship>> {
        let mut ships = self.matching(spec)?;
        ships.sort_by(|a, b| page.order.compare(a, b));

        let total = ships.len();
        let data = ships
            .into_iter()
            .skip(page.offset())
            .take(page.page_size)
            .collect();

        Ok(Page::new(data, page, total))
    }

    async fn count(&self, spec: &ShipSpecification) -> Result<usize> {
        let table = self
            .table
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(table.ships.values().filter(|ship| spec.matches(ship)).count())
    }
}
