//! Macro-generated test suite for `ShipRepository` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use shipyard::storage::InMemoryShipRepository;
//!
//! ship_repository_tests!(InMemoryShipRepository::new());
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_insert_assigns_distinct_ids`: ids are positive and unique
//! - `test_find_by_id`: stored record round-trips, unknown id is None
//! - `test_exists_by_id`
//! - `test_update_existing` / `test_update_nonexistent`
//! - `test_delete_existing`
//!
//! ## Queries
//! - `test_find_all_unconstrained`: empty specification returns everything
//! - `test_find_all_intersects_conditions`: AND semantics
//! - `test_count_matches_find_all`
//! - `test_find_page_orders_and_counts`
//!
//! ## Edge Cases
//! - `test_concurrent_inserts`: parallel inserts from spawned tasks

/// Generate a full `ShipRepository` conformance test suite.
///
/// `$factory` is re-evaluated for each test so every test starts from an
/// empty repository. For the concurrent test, the repository must also be
/// `Clone + 'static`.
#[macro_export]
macro_rules! ship_repository_tests {
    ($factory:expr) => {
        mod ship_repository_contract_tests {
            use super::*;
            use shipyard::core::predicate::{
                ShipSpecification, by_crew_size_range, by_ship_type, by_usage,
            };
            use shipyard::core::query::{PageRequest, ShipOrder};
            use shipyard::core::repository::ShipRepository;
            use shipyard::core::ship::ShipType;

            async fn seeded<R: ShipRepository>(repo: &R) -> Vec<i64> {
                let mut ids = Vec::new();
                for ship in fleet() {
                    ids.push(repo.insert(ship).await.unwrap().id);
                }
                ids
            }

            // ==================================================================
            // CRUD
            // ==================================================================

            #[tokio::test]
            async fn test_insert_assigns_distinct_ids() {
                let repo = $factory;
                let ids = seeded(&repo).await;

                assert!(ids.iter().all(|id| *id > 0));
                let mut unique = ids.clone();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), ids.len());
            }

            #[tokio::test]
            async fn test_find_by_id() {
                let repo = $factory;
                let ids = seeded(&repo).await;

                let ship = repo.find_by_id(ids[1]).await.unwrap().unwrap();
                assert_eq!(ship.id, ids[1]);
                assert_eq!(ship.name, "Nebula");
                assert_eq!(ship.planet, "Earth");
                assert_eq!(ship.ship_type, ShipType::Military);
                assert!(ship.is_used);
                assert_eq!(ship.crew_size, 40);
                assert_eq!(ship.rating, -2988.99);

                assert!(repo.find_by_id(i64::MAX).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_exists_by_id() {
                let repo = $factory;
                let ids = seeded(&repo).await;

                assert!(repo.exists_by_id(ids[0]).await.unwrap());
                assert!(!repo.exists_by_id(i64::MAX).await.unwrap());
            }

            #[tokio::test]
            async fn test_update_existing() {
                let repo = $factory;
                let ids = seeded(&repo).await;

                let mut ship = repo.find_by_id(ids[2]).await.unwrap().unwrap();
                ship.name = "Comet II".to_string();
                ship.crew_size = 6;
                repo.update(ids[2], ship).await.unwrap();

                let stored = repo.find_by_id(ids[2]).await.unwrap().unwrap();
                assert_eq!(stored.name, "Comet II");
                assert_eq!(stored.crew_size, 6);
                assert_eq!(stored.planet, "Mars");
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let repo = $factory;
                let ids = seeded(&repo).await;

                let ship = repo.find_by_id(ids[0]).await.unwrap().unwrap();
                assert!(repo.update(i64::MAX, ship).await.is_err());
            }

            #[tokio::test]
            async fn test_delete_existing() {
                let repo = $factory;
                let ids = seeded(&repo).await;

                repo.delete_by_id(ids[3]).await.unwrap();
                assert!(repo.find_by_id(ids[3]).await.unwrap().is_none());
                assert!(!repo.exists_by_id(ids[3]).await.unwrap());
                assert_eq!(repo.count(&ShipSpecification::all()).await.unwrap(), 4);
            }

            // ==================================================================
            // Queries
            // ==================================================================

            #[tokio::test]
            async fn test_find_all_unconstrained() {
                let repo = $factory;
                seeded(&repo).await;

                let all = repo.find_all(&ShipSpecification::all()).await.unwrap();
                assert_eq!(all.len(), 5);
            }

            #[tokio::test]
            async fn test_find_all_intersects_conditions() {
                let repo = $factory;
                seeded(&repo).await;

                let spec = ShipSpecification::all()
                    .and(by_ship_type(Some(ShipType::Military)))
                    .and(by_usage(Some(true)));
                let mut names: Vec<String> = repo
                    .find_all(&spec)
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|s| s.name)
                    .collect();
                names.sort();
                assert_eq!(names, vec!["Nebula", "Pioneer"]);
            }

            #[tokio::test]
            async fn test_count_matches_find_all() {
                let repo = $factory;
                seeded(&repo).await;

                let spec = ShipSpecification::all().and(by_crew_size_range(Some(10), None));
                let found = repo.find_all(&spec).await.unwrap();
                assert!(found.iter().all(|s| s.crew_size >= 10));
                assert_eq!(found.len(), 3);
                assert_eq!(repo.count(&spec).await.unwrap(), found.len());
            }

            #[tokio::test]
            async fn test_find_page_orders_and_counts() {
                let repo = $factory;
                seeded(&repo).await;

                let request = PageRequest::new(0, 2, ShipOrder::Rating);
                let page = repo
                    .find_page(&ShipSpecification::all(), &request)
                    .await
                    .unwrap();

                let names: Vec<&str> = page.data.iter().map(|s| s.name.as_str()).collect();
                assert_eq!(names, vec!["Pioneer", "Orion"]);
                assert_eq!(page.pagination.total, 5);
                assert_eq!(page.pagination.total_pages, 3);
                assert!(page.pagination.has_next);
                assert!(!page.pagination.has_prev);

                let request = PageRequest::new(2, 2, ShipOrder::Rating);
                let last = repo
                    .find_page(&ShipSpecification::all(), &request)
                    .await
                    .unwrap();
                assert_eq!(last.data.len(), 1);
                assert_eq!(last.data[0].name, "Comet");
            }

            // ==================================================================
            // Edge Cases
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_inserts() {
                let repo = $factory;

                let mut handles = Vec::new();
                for _ in 0..10 {
                    let repo = repo.clone();
                    handles.push(tokio::spawn(async move {
                        let mut ids = Vec::new();
                        for ship in fleet() {
                            ids.push(repo.insert(ship).await.unwrap().id);
                        }
                        ids
                    }));
                }

                let mut ids = Vec::new();
                for handle in handles {
                    ids.extend(handle.await.unwrap());
                }
                ids.sort();
                ids.dedup();

                assert_eq!(ids.len(), 50);
                assert_eq!(repo.count(&ShipSpecification::all()).await.unwrap(), 50);
            }
        }
    };
}
