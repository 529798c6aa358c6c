use serde::{Deserialize, Serialize};

use crate::core::{Ascendant, Body, DisplayMode, HouseCusps, ZodiacSign};
use crate::error::{LayoutError, LayoutResult};

/// How bodies are assigned to houses, chosen once per chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlacementStrategy {
    /// House follows the body's sign via equal-house rotation.
    Rashi,
    /// House taken from the body's pre-assigned house (or its sign when
    /// none was assigned); the displayed sign is re-derived from that house.
    EqualBhava,
    /// House found by cusp containment of the body's longitude.
    CuspBhava(HouseCusps),
}

/// House and display sign resolved for one body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPosition {
    pub house: u8,
    pub sign: ZodiacSign,
}

impl PlacementStrategy {
    /// Bhava Chalit uses true cusps when they are available and falls back to
    /// equal houses otherwise.
    #[must_use]
    pub fn for_mode(mode: DisplayMode, cusps: Option<HouseCusps>) -> Self {
        match (mode, cusps) {
            (DisplayMode::Rashi, _) => Self::Rashi,
            (DisplayMode::BhavaChalit, Some(cusps)) => Self::CuspBhava(cusps),
            (DisplayMode::BhavaChalit, None) => Self::EqualBhava,
        }
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        match self {
            Self::Rashi => DisplayMode::Rashi,
            Self::EqualBhava | Self::CuspBhava(_) => DisplayMode::BhavaChalit,
        }
    }

    pub fn resolve(&self, ascendant: Ascendant, body: &Body) -> LayoutResult<ResolvedPosition> {
        body.validate()?;
        let house = match self {
            Self::Rashi => {
                let sign = body.sign()?;
                return Ok(ResolvedPosition {
                    house: ascendant.sign.house_of(sign),
                    sign,
                });
            }
            Self::EqualBhava => match body.house_number {
                Some(house) => house,
                None => ascendant.sign.house_of(body.sign()?),
            },
            Self::CuspBhava(cusps) => match (body.checked_longitude()?, body.house_number) {
                (Some(longitude), _) => cusps.house_for_longitude(longitude)?,
                (None, Some(house)) => house,
                (None, None) => {
                    return Err(LayoutError::MissingPosition {
                        name: body.name.clone(),
                        needed: "a longitude or house number for cusp placement",
                    });
                }
            },
        };
        Ok(ResolvedPosition {
            house,
            sign: ascendant.sign.for_house(house)?,
        })
    }
}
