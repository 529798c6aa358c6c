//! Unequal-house ("Bhava Chalit") membership from absolute cusp longitudes.

use serde::{Deserialize, Serialize};

use crate::core::primitives::validate_longitude;
use crate::error::{LayoutError, LayoutResult};

/// Twelve absolute cusp longitudes; `cusps[i]` starts house `i + 1`.
///
/// Cusps need not be 30 degrees apart and the sequence may wrap past 360.
/// House `i + 1` ends, exclusively, where house `(i + 1) % 12 + 1` starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct HouseCusps([f64; 12]);

impl HouseCusps {
    /// Builds validated cusps. Anything other than 12 finite longitudes in
    /// `[0, 360]` is rejected; nothing is padded or truncated.
    pub fn new(cusps: &[f64]) -> LayoutResult<Self> {
        if cusps.len() != 12 {
            return Err(LayoutError::InvalidCuspCount { len: cusps.len() });
        }
        let mut out = [0.0; 12];
        for (index, (slot, value)) in out.iter_mut().zip(cusps).enumerate() {
            *slot = validate_longitude(*value, &format!("cusp {}", index + 1))?;
        }
        Ok(Self(out))
    }

    /// Equal houses of 30 degrees starting at `start`.
    pub fn equal_from(start: f64) -> LayoutResult<Self> {
        let start = validate_longitude(start, "equal house start")?;
        let mut out = [0.0; 12];
        for (index, slot) in out.iter_mut().enumerate() {
            *slot = crate::core::primitives::normalize_360(start + index as f64 * 30.0);
        }
        Ok(Self(out))
    }

    #[must_use]
    pub fn as_array(&self) -> &[f64; 12] {
        &self.0
    }

    /// Start longitude of `house` (1..=12).
    pub fn start_of(&self, house: u8) -> LayoutResult<f64> {
        crate::core::rotation::validate_house(house)?;
        Ok(self.0[usize::from(house - 1)])
    }

    /// House (1..=12) containing `longitude`.
    pub fn house_for_longitude(&self, longitude: f64) -> LayoutResult<u8> {
        let longitude = validate_longitude(longitude, "longitude")?;
        Ok(resolve_house(longitude, &self.0))
    }
}

impl TryFrom<Vec<f64>> for HouseCusps {
    type Error = LayoutError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<HouseCusps> for Vec<f64> {
    fn from(value: HouseCusps) -> Self {
        value.0.to_vec()
    }
}

/// House (1..=12) containing `longitude` for raw cusp longitudes.
///
/// Fails when `cusps` does not hold exactly 12 entries.
pub fn house_for_longitude(longitude: f64, cusps: &[f64]) -> LayoutResult<u8> {
    HouseCusps::new(cusps)?.house_for_longitude(longitude)
}

// Intervals are start-inclusive, end-exclusive: a longitude sitting exactly on
// a cusp belongs to the house starting there. House 12 is taken by
// elimination so the last boundary never depends on float equality.
fn resolve_house(longitude: f64, cusps: &[f64; 12]) -> u8 {
    for i in 0..11 {
        let start = cusps[i];
        let end = cusps[(i + 1) % 12];
        let inside = if start < end {
            start <= longitude && longitude < end
        } else {
            longitude >= start || longitude < end
        };
        if inside {
            return i as u8 + 1;
        }
    }
    12
}
