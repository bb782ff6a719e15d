//! Validation of ship payloads
//!
//! Field validators are small reusable closures; [`ShipValidator`] applies them
//! to a payload according to the operation (create or update) being performed.

pub mod rules;
pub mod validators;

pub use rules::{Operation, ShipValidator};
