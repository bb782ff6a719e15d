//! Ship entity, its input payload and the insert shape handed to storage

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::ValidationError;
use crate::core::rating;

/// Closed set of ship categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipType {
    Transport,
    Military,
    Merchant,
}

impl ShipType {
    pub const ALL: [ShipType; 3] = [ShipType::Transport, ShipType::Military, ShipType::Merchant];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShipType::Transport => "TRANSPORT",
            ShipType::Military => "MILITARY",
            ShipType::Merchant => "MERCHANT",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted ship record
///
/// Every field is present once the record is stored. `rating` is derived from
/// `speed`, `is_used` and the production year and is never taken from callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: i64,
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    /// Serialized as epoch milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub prod_date: DateTime<Utc>,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

impl Ship {
    /// Attach a storage-assigned id to a validated insert shape
    pub fn from_new(id: i64, ship: NewShip) -> Self {
        Self {
            id,
            name: ship.name,
            planet: ship.planet,
            ship_type: ship.ship_type,
            prod_date: ship.prod_date,
            is_used: ship.is_used,
            speed: ship.speed,
            crew_size: ship.crew_size,
            rating: ship.rating,
        }
    }

    /// Calendar year of the production date (UTC)
    pub fn prod_year(&self) -> i32 {
        self.prod_date.year()
    }

    /// Return a copy of this record with every field present in `patch` applied.
    ///
    /// The rating is recomputed from the merged values; `id` never changes.
    pub fn merged(&self, patch: &ShipPayload) -> Ship {
        let mut ship = self.clone();

        if let Some(name) = &patch.name {
            ship.name = name.clone();
        }
        if let Some(planet) = &patch.planet {
            ship.planet = planet.clone();
        }
        if let Some(ship_type) = patch.ship_type {
            ship.ship_type = ship_type;
        }
        if let Some(prod_date) = patch.prod_date {
            ship.prod_date = prod_date;
        }
        if let Some(is_used) = patch.is_used {
            ship.is_used = is_used;
        }
        if let Some(speed) = patch.speed {
            ship.speed = speed;
        }
        if let Some(crew_size) = patch.crew_size {
            ship.crew_size = crew_size;
        }

        ship.rating = rating::rating(ship.speed, ship.is_used, ship.prod_year());
        ship
    }
}

/// Caller-supplied ship fields, all optional
///
/// Used as the full candidate on create and as the partial update on edit.
/// `id` and `rating` are not part of the payload; if a client sends them they
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub planet: Option<String>,
    #[serde(default)]
    pub ship_type: Option<ShipType>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub prod_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_used: Option<bool>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub crew_size: Option<i32>,
}

impl ShipPayload {
    /// Names of the create-time required fields that are absent, in declaration order
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.planet.is_none() {
            missing.push("planet");
        }
        if self.ship_type.is_none() {
            missing.push("shipType");
        }
        if self.prod_date.is_none() {
            missing.push("prodDate");
        }
        if self.speed.is_none() {
            missing.push("speed");
        }
        if self.crew_size.is_none() {
            missing.push("crewSize");
        }
        missing
    }
}

/// A complete, validated ship that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewShip {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: DateTime<Utc>,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

impl TryFrom<ShipPayload> for NewShip {
    type Error = ValidationError;

    /// Build the insert shape: `is_used` defaults to `false` and the rating is computed.
    fn try_from(payload: ShipPayload) -> Result<Self, Self::Error> {
        let missing = payload.missing_required();
        let (
            Some(name),
            Some(planet),
            Some(ship_type),
            Some(prod_date),
            Some(speed),
            Some(crew_size),
        ) = (
            payload.name,
            payload.planet,
            payload.ship_type,
            payload.prod_date,
            payload.speed,
            payload.crew_size,
        )
        else {
            return Err(ValidationError::MissingField { fields: missing });
        };

        let is_used = payload.is_used.unwrap_or(false);
        let rating = rating::rating(speed, is_used, prod_date.year());

        Ok(Self {
            name,
            planet,
            ship_type,
            prod_date,
            is_used,
            speed,
            crew_size,
            rating,
        })
    }
}
