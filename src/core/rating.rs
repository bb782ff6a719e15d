//! Ship rating computation

/// Reference year of the rating formula
pub const CURRENT_YEAR: i32 = 3019;

/// Decimal places kept in a stored rating
pub const RATING_SCALE: u32 = 2;

/// Compute a ship's rating.
///
/// `rating = (80 * speed * k) / 3019 - prod_year + 1`, where `k` is `0.5` for a
/// used ship and `1` otherwise, rounded half-up to two decimal places.
pub fn rating(speed: f64, is_used: bool, prod_year: i32) -> f64 {
    let k = if is_used { 0.5 } else { 1.0 };
    let raw = (80.0 * speed * k) / f64::from(CURRENT_YEAR) - f64::from(prod_year) + 1.0;
    round_half_up(raw, RATING_SCALE)
}

/// Round to `scale` decimal places, ties away from zero
pub fn round_half_up(value: f64, scale: u32) -> f64 {
    let factor = 10_f64.powi(scale as i32);
    (value * factor).round() / factor
}
