//! # Shipyard
//!
//! A catalogue service for spaceships: create, edit, delete, fetch and search
//! ships over a REST API.
//!
//! ## Features
//!
//! - **Validation**: required fields on create, range checks on every provided field
//! - **Rating**: a ship's rating is derived from its speed, usage and production year
//! - **Filtering**: optional predicate fragments AND-combined into one specification
//! - **Paging**: zero-based pages sorted by id, speed, production date or rating
//! - **Pluggable Storage**: any [`ShipRepository`](core::ShipRepository) implementation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shipyard::prelude::*;
//!
//! let config = ShipyardConfig::from_yaml_file("shipyard.yaml")?;
//!
//! ServerBuilder::new()
//!     .with_repository(InMemoryShipRepository::new())
//!     .with_config(config)
//!     .serve()
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{
            ConfigError, EntityError, RequestError, ShipyardError, ShipyardResult, StorageError,
            ValidationError,
        },
        predicate::{Condition, RangeBound, ShipFilter, ShipSpecification},
        query::{Page, PageParams, PageRequest, PaginationMeta, ShipOrder},
        repository::ShipRepository,
        service::ShipService,
        ship::{NewShip, Ship, ShipPayload, ShipType},
        validation::{Operation, ShipValidator},
    };

    // === Storage ===
    #[cfg(feature = "in-memory")]
    pub use crate::storage::InMemoryShipRepository;

    // === Config ===
    pub use crate::config::{LoggingConfig, PagingConfig, ServerConfig, ShipyardConfig};

    // === Server ===
    pub use crate::server::{ServerBuilder, ShipAppState};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
