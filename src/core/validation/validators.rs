//! Reusable field validators
//!
//! Each factory returns a closure `Fn(field, value) -> Result<(), message>`;
//! the rule table in [`super::rules`] decides which closure runs for which field.

use chrono::{DateTime, Datelike, Utc};

/// Validator: text length (in characters) must be within `[min, max]`
pub fn char_length(
    min: usize,
    max: usize,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        let len = value.chars().count();
        if len < min {
            Err(format!(
                "'{}' must have at least {} characters (got {})",
                field, min, len
            ))
        } else if len > max {
            Err(format!(
                "'{}' must not exceed {} characters (got {})",
                field, max, len
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: integer must be within `[min, max]`
pub fn int_range(
    min: i32,
    max: i32,
) -> impl Fn(&str, &i32) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &i32| {
        if (min..=max).contains(value) {
            Ok(())
        } else {
            Err(format!(
                "'{}' must be between {} and {} (got {})",
                field, min, max, value
            ))
        }
    }
}

/// Validator: real number must be within `[min, max]`
///
/// NaN is never in range.
pub fn float_range(
    min: f64,
    max: f64,
) -> impl Fn(&str, &f64) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &f64| {
        if *value >= min && *value <= max {
            Ok(())
        } else {
            Err(format!(
                "'{}' must be between {} and {} (got {})",
                field, min, max, value
            ))
        }
    }
}

/// Validator: calendar year of a timestamp (UTC) must be within `[min, max]`
pub fn year_range(
    min: i32,
    max: i32,
) -> impl Fn(&str, &DateTime<Utc>) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &DateTime<Utc>| {
        let year = value.year();
        if (min..=max).contains(&year) {
            Ok(())
        } else {
            Err(format!(
                "'{}' year must be between {} and {} (got {})",
                field, min, max, year
            ))
        }
    }
}
