//! Ship validation rules for create and update operations

use super::validators::{char_length, float_range, int_range, year_range};
use crate::core::error::ValidationError;
use crate::core::ship::ShipPayload;

pub const NAME_LENGTH: (usize, usize) = (1, 50);
pub const PLANET_LENGTH: (usize, usize) = (1, 50);
pub const CREW_SIZE: (i32, i32) = (1, 50);
pub const SPEED: (f64, f64) = (0.01, 0.99);
pub const PROD_YEAR: (i32, i32) = (2800, 3019);

/// The operation a payload is validated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Full candidate: required fields must all be present
    Create,
    /// Partial update: only supplied fields are checked
    Update,
}

/// Validates ship payloads.
///
/// On create, presence of every required field is checked first as a single
/// combined condition. Range checks then run one field at a time in the order
/// name, planet, crewSize, speed, prodDate, and the first violation is
/// returned.
pub struct ShipValidator;

impl ShipValidator {
    pub fn validate(payload: &ShipPayload, operation: Operation) -> Result<(), ValidationError> {
        if operation == Operation::Create {
            let missing = payload.missing_required();
            if !missing.is_empty() {
                return Err(ValidationError::MissingField { fields: missing });
            }
        }

        check(
            "name",
            payload.name.as_deref(),
            char_length(NAME_LENGTH.0, NAME_LENGTH.1),
        )?;
        check(
            "planet",
            payload.planet.as_deref(),
            char_length(PLANET_LENGTH.0, PLANET_LENGTH.1),
        )?;
        check(
            "crewSize",
            payload.crew_size.as_ref(),
            int_range(CREW_SIZE.0, CREW_SIZE.1),
        )?;
        check("speed", payload.speed.as_ref(), float_range(SPEED.0, SPEED.1))?;
        check(
            "prodDate",
            payload.prod_date.as_ref(),
            year_range(PROD_YEAR.0, PROD_YEAR.1),
        )?;

        Ok(())
    }
}

/// Run `rule` against `value` when it is present
fn check<T: ?Sized>(
    field: &'static str,
    value: Option<&T>,
    rule: impl Fn(&str, &T) -> Result<(), String>,
) -> Result<(), ValidationError> {
    match value {
        Some(value) => {
            rule(field, value).map_err(|message| ValidationError::InvalidField { field, message })
        }
        None => Ok(()),
    }
}
