//! Equal-house sign rotation.
//!
//! House 1 always carries the ascendant's sign and every following house
//! advances one sign, wrapping cyclically after Pisces.

use crate::core::ZodiacSign;
use crate::error::{LayoutError, LayoutResult};

/// Sign number (1..=12) occupying equal house `house` for an ascendant at
/// 0-based sign index `ascendant_index`.
pub fn sign_for_house(ascendant_index: u8, house: u8) -> LayoutResult<u8> {
    validate_ascendant_index(ascendant_index)?;
    validate_house(house)?;
    Ok((ascendant_index + house - 1) % 12 + 1)
}

/// Equal house (1..=12) occupied by sign number `sign` for an ascendant at
/// 0-based sign index `ascendant_index`. Inverse of [`sign_for_house`].
pub fn house_for_sign(ascendant_index: u8, sign: u8) -> LayoutResult<u8> {
    validate_ascendant_index(ascendant_index)?;
    if !(1..=12).contains(&sign) {
        return Err(LayoutError::SignNumberOutOfRange { number: sign });
    }
    Ok((sign + 11 - ascendant_index) % 12 + 1)
}

pub(crate) fn validate_house(house: u8) -> LayoutResult<u8> {
    if !(1..=12).contains(&house) {
        return Err(LayoutError::HouseOutOfRange { house });
    }
    Ok(house)
}

fn validate_ascendant_index(index: u8) -> LayoutResult<u8> {
    if index > 11 {
        return Err(LayoutError::SignIndexOutOfRange { index });
    }
    Ok(index)
}

impl ZodiacSign {
    /// Sign occupying equal house `house` when `self` rises.
    pub fn for_house(self, house: u8) -> LayoutResult<ZodiacSign> {
        ZodiacSign::from_number(sign_for_house(self.index(), house)?)
    }

    /// Equal house that `sign` occupies when `self` rises.
    #[must_use]
    pub fn house_of(self, sign: ZodiacSign) -> u8 {
        (sign.number() + 11 - self.index()) % 12 + 1
    }
}
