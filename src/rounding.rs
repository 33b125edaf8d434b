//! Rounding rules shared by the quote engine and the words formatter

/// Tolerance, in steps, for floating-point noise when rounding up
pub const CEIL_EPSILON: f64 = 1e-9;

/// Round up to the next multiple of `step`
///
/// Values less than `CEIL_EPSILON` steps above a multiple stay on that
/// multiple. Never returns negative zero.
pub fn ceil_to_step(value: f64, step: f64) -> f64 {
    let rounded = ((value / step) - CEIL_EPSILON).ceil() * step;
    if rounded <= 0.0 { 0.0 } else { rounded }
}

/// Round up to the next multiple of 100
pub fn ceil_to_hundred(value: f64) -> f64 {
    ceil_to_step(value, 100.0)
}

/// Round to the nearest whole unit, halves upwards
///
/// Amounts are non-negative, where `f64::round` (halves away from zero)
/// is half-up.
pub fn round_half_up(value: f64) -> f64 {
    value.round()
}

/// Round to the nearest thousand
pub fn round_to_nearest_thousand(value: f64) -> f64 {
    round_half_up(value / 1000.0) * 1000.0
}
