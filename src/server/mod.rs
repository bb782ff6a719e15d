//! Server module exposing ships over REST
//!
//! `ServerBuilder` wires a [`ShipRepository`](crate::core::ShipRepository)
//! into the ship routes, health routes and request tracing.

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::ShipAppState;
