use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{LayoutError, LayoutResult};

pub const FULL_CIRCLE_DEG: f64 = 360.0;
pub const SIGN_SPAN_DEG: f64 = 30.0;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> LayoutResult<f64> {
    value.to_f64().ok_or_else(|| {
        LayoutError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Normalize an angle to [0, 360) degrees.
#[must_use]
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % FULL_CIRCLE_DEG;
    if r < 0.0 { r + FULL_CIRCLE_DEG } else { r }
}

/// Checks that `value` is a finite longitude inside `[0, 360]` and folds 360 onto 0.
///
/// Values outside the circle are rejected rather than wrapped: the engine does
/// not second-guess upstream positions.
pub fn validate_longitude(value: f64, field: &str) -> LayoutResult<f64> {
    if !value.is_finite() || !(0.0..=FULL_CIRCLE_DEG).contains(&value) {
        return Err(LayoutError::InvalidLongitude {
            field: field.to_owned(),
            value,
        });
    }
    Ok(normalize_360(value))
}

/// 0-based sign index of an already validated longitude.
#[must_use]
pub fn sign_index_for_longitude(longitude: f64) -> u8 {
    let index = (normalize_360(longitude) / SIGN_SPAN_DEG).floor() as u8;
    // 360 - epsilon can round up to 12
    index.min(11)
}

/// Whole degrees elapsed inside the sign, `0..=29`.
#[must_use]
pub fn whole_degrees_in_sign(longitude: f64) -> u8 {
    let lon = normalize_360(longitude);
    let within = lon - f64::from(sign_index_for_longitude(lon)) * SIGN_SPAN_DEG;
    (within.floor() as u8).min(29)
}
