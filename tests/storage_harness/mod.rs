//! Shared test harness for ship repository and service testing
//!
//! Provides payload and insert-shape builders plus a small reference fleet.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod ship_repository_tests;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

use shipyard::core::rating;
use shipyard::core::ship::{NewShip, ShipPayload, ShipType};

/// Midnight UTC on January 1st of `year`
pub fn year_start(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
}

/// Epoch milliseconds of [`year_start`]
pub fn year_millis(year: i32) -> i64 {
    year_start(year).timestamp_millis()
}

/// A complete create payload with valid values
pub fn valid_payload() -> ShipPayload {
    ShipPayload {
        name: Some("Orion".to_string()),
        planet: Some("Mars".to_string()),
        ship_type: Some(ShipType::Transport),
        prod_date: Some(year_start(3000)),
        is_used: Some(false),
        speed: Some(0.5),
        crew_size: Some(10),
    }
}

/// A complete create payload built from the given attributes
pub fn payload(
    name: &str,
    planet: &str,
    ship_type: ShipType,
    year: i32,
    is_used: bool,
    speed: f64,
    crew_size: i32,
) -> ShipPayload {
    ShipPayload {
        name: Some(name.to_string()),
        planet: Some(planet.to_string()),
        ship_type: Some(ship_type),
        prod_date: Some(year_start(year)),
        is_used: Some(is_used),
        speed: Some(speed),
        crew_size: Some(crew_size),
    }
}

/// An insert shape with a consistent rating
pub fn new_ship(
    name: &str,
    planet: &str,
    ship_type: ShipType,
    year: i32,
    is_used: bool,
    speed: f64,
    crew_size: i32,
) -> NewShip {
    NewShip {
        name: name.to_string(),
        planet: planet.to_string(),
        ship_type,
        prod_date: year_start(year),
        is_used,
        speed,
        crew_size,
        rating: rating::rating(speed, is_used, year),
    }
}

/// Reference fleet, inserted in this order (ids 1..=5 on an empty repository)
///
/// | id | name      | planet  | type      | year | used  | speed | crew | rating   |
/// |----|-----------|---------|-----------|------|-------|-------|------|----------|
/// | 1  | Orion     | Mars    | TRANSPORT | 3000 | false | 0.5   | 10   | -2998.99 |
/// | 2  | Nebula    | Earth   | MILITARY  | 2990 | true  | 0.9   | 40   | -2988.99 |
/// | 3  | Comet     | Mars    | MERCHANT  | 2900 | false | 0.2   | 5    | -2898.99 |
/// | 4  | Star Wolf | Jupiter | MILITARY  | 2990 | false | 0.8   | 25   | -2988.98 |
/// | 5  | Pioneer   | Venus   | MILITARY  | 3000 | true  | 0.3   | 2    | -2999.00 |
pub fn fleet() -> Vec<NewShip> {
    vec![
        new_ship("Orion", "Mars", ShipType::Transport, 3000, false, 0.5, 10),
        new_ship("Nebula", "Earth", ShipType::Military, 2990, true, 0.9, 40),
        new_ship("Comet", "Mars", ShipType::Merchant, 2900, false, 0.2, 5),
        new_ship("Star Wolf", "Jupiter", ShipType::Military, 2990, false, 0.8, 25),
        new_ship("Pioneer", "Venus", ShipType::Military, 3000, true, 0.3, 2),
    ]
}

/// The reference fleet as create payloads
pub fn fleet_payloads() -> Vec<ShipPayload> {
    vec![
        payload("Orion", "Mars", ShipType::Transport, 3000, false, 0.5, 10),
        payload("Nebula", "Earth", ShipType::Military, 2990, true, 0.9, 40),
        payload("Comet", "Mars", ShipType::Merchant, 2900, false, 0.2, 5),
        payload("Star Wolf", "Jupiter", ShipType::Military, 2990, false, 0.8, 25),
        payload("Pioneer", "Venus", ShipType::Military, 3000, true, 0.3, 2),
    ]
}

/// The reference fleet as JSON request bodies
pub fn fleet_json() -> Vec<Value> {
    fleet_payloads()
        .into_iter()
        .map(|p| serde_json::to_value(p).unwrap())
        .collect()
}

/// A valid create body in wire format
pub fn valid_json() -> Value {
    json!({
        "name": "Orion",
        "planet": "Mars",
        "shipType": "TRANSPORT",
        "prodDate": year_millis(3000),
        "isUsed": false,
        "speed": 0.5,
        "crewSize": 10
    })
}
