//! Composable filter predicates over ships
//!
//! Each `by_*` function turns optional filter inputs into a predicate fragment
//! ([`Condition`]) or `None` when it imposes no constraint. Fragments are
//! AND-ed together into a [`ShipSpecification`]; a specification without
//! fragments matches every ship.
//!
//! ```rust,ignore
//! let spec: ShipSpecification = [
//!     by_ship_type(Some(ShipType::Military)),
//!     by_usage(Some(true)),
//!     by_crew_size_range(Some(10), None),
//! ]
//! .into_iter()
//! .collect();
//! ```

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::error::RequestError;
use crate::core::ship::{Ship, ShipType};

/// Inclusive bound(s) on an ordered attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeBound<T> {
    AtLeast(T),
    AtMost(T),
    Between(T, T),
}

impl<T: PartialOrd + Copy> RangeBound<T> {
    /// Build a bound from optional limits; `None` when both are absent
    pub fn from_limits(min: Option<T>, max: Option<T>) -> Option<Self> {
        match (min, max) {
            (None, None) => None,
            (Some(min), None) => Some(RangeBound::AtLeast(min)),
            (None, Some(max)) => Some(RangeBound::AtMost(max)),
            (Some(min), Some(max)) => Some(RangeBound::Between(min, max)),
        }
    }

    pub fn contains(&self, value: T) -> bool {
        match *self {
            RangeBound::AtLeast(min) => value >= min,
            RangeBound::AtMost(max) => value <= max,
            RangeBound::Between(min, max) => value >= min && value <= max,
        }
    }
}

/// A single predicate fragment over one ship attribute
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Case-sensitive substring of `name`
    NameContains(String),
    /// Case-sensitive substring of `planet`
    PlanetContains(String),
    ShipTypeIs(ShipType),
    ProdDate(RangeBound<DateTime<Utc>>),
    IsUsed(bool),
    Speed(RangeBound<f64>),
    CrewSize(RangeBound<i32>),
    Rating(RangeBound<f64>),
}

impl Condition {
    pub fn matches(&self, ship: &Ship) -> bool {
        match self {
            Condition::NameContains(needle) => ship.name.contains(needle.as_str()),
            Condition::PlanetContains(needle) => ship.planet.contains(needle.as_str()),
            Condition::ShipTypeIs(ship_type) => ship.ship_type == *ship_type,
            Condition::ProdDate(bound) => bound.contains(ship.prod_date),
            Condition::IsUsed(flag) => ship.is_used == *flag,
            Condition::Speed(bound) => bound.contains(ship.speed),
            Condition::CrewSize(bound) => bound.contains(ship.crew_size),
            Condition::Rating(bound) => bound.contains(ship.rating),
        }
    }
}

/// Conjunction of predicate fragments
///
/// Storage adapters either evaluate it in memory with [`matches`](Self::matches)
/// or translate [`conditions`](Self::conditions) into their own query language.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipSpecification {
    conditions: Vec<Condition>,
}

impl ShipSpecification {
    /// The specification that matches every ship
    pub fn all() -> Self {
        Self::default()
    }

    /// AND a fragment into this specification; `None` leaves it unchanged
    pub fn and(mut self, fragment: Option<Condition>) -> Self {
        if let Some(condition) = fragment {
            self.conditions.push(condition);
        }
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// True when no fragment constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn matches(&self, ship: &Ship) -> bool {
        self.conditions.iter().all(|condition| condition.matches(ship))
    }
}

impl FromIterator<Option<Condition>> for ShipSpecification {
    fn from_iter<I: IntoIterator<Item = Option<Condition>>>(iter: I) -> Self {
        Self {
            conditions: iter.into_iter().flatten().collect(),
        }
    }
}

pub fn by_name(name: Option<&str>) -> Option<Condition> {
    name.map(|name| Condition::NameContains(name.to_string()))
}

pub fn by_planet(planet: Option<&str>) -> Option<Condition> {
    planet.map(|planet| Condition::PlanetContains(planet.to_string()))
}

pub fn by_ship_type(ship_type: Option<ShipType>) -> Option<Condition> {
    ship_type.map(Condition::ShipTypeIs)
}

pub fn by_date_range(
    after: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
) -> Option<Condition> {
    RangeBound::from_limits(after, before).map(Condition::ProdDate)
}

pub fn by_usage(is_used: Option<bool>) -> Option<Condition> {
    is_used.map(Condition::IsUsed)
}

pub fn by_speed_range(min: Option<f64>, max: Option<f64>) -> Option<Condition> {
    RangeBound::from_limits(min, max).map(Condition::Speed)
}

pub fn by_crew_size_range(min: Option<i32>, max: Option<i32>) -> Option<Condition> {
    RangeBound::from_limits(min, max).map(Condition::CrewSize)
}

pub fn by_rating_range(min: Option<f64>, max: Option<f64>) -> Option<Condition> {
    RangeBound::from_limits(min, max).map(Condition::Rating)
}

/// Filter parameters accepted by the list and count operations
///
/// Field names follow the query string (`shipType`, `minSpeed`, ...); `after`
/// and `before` are epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipFilter {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    pub after: Option<i64>,
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl ShipFilter {
    /// Compose every active filter into one specification
    pub fn to_specification(&self) -> Result<ShipSpecification, RequestError> {
        let after = millis_to_datetime("after", self.after)?;
        let before = millis_to_datetime("before", self.before)?;

        Ok([
            by_name(self.name.as_deref()),
            by_planet(self.planet.as_deref()),
            by_ship_type(self.ship_type),
            by_date_range(after, before),
            by_usage(self.is_used),
            by_speed_range(self.min_speed, self.max_speed),
            by_crew_size_range(self.min_crew_size, self.max_crew_size),
            by_rating_range(self.min_rating, self.max_rating),
        ]
        .into_iter()
        .collect())
    }
}

fn millis_to_datetime(
    name: &'static str,
    millis: Option<i64>,
) -> Result<Option<DateTime<Utc>>, RequestError> {
    millis
        .map(|ms| {
            DateTime::from_timestamp_millis(ms).ok_or_else(|| RequestError::InvalidParameter {
                name,
                value: ms.to_string(),
            })
        })
        .transpose()
}
