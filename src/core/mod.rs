//! Core module containing the ship model and the operations over it

pub mod error;
pub mod predicate;
pub mod query;
pub mod rating;
pub mod repository;
pub mod service;
pub mod ship;
pub mod validation;

pub use error::{ShipyardError, ShipyardResult};
pub use predicate::{Condition, RangeBound, ShipFilter, ShipSpecification};
pub use query::{Page, PageParams, PageRequest, PaginationMeta, ShipOrder};
pub use repository::ShipRepository;
pub use service::ShipService;
pub use ship::{NewShip, Ship, ShipPayload, ShipType};
pub use validation::{Operation, ShipValidator};
