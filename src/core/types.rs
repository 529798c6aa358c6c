use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::ZodiacSign;
use crate::core::primitives::{decimal_to_f64, sign_index_for_longitude, validate_longitude};
use crate::error::{LayoutError, LayoutResult};

/// Point on the chart drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyOrigin {
    Natal,
    Transit,
}

impl BodyOrigin {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Natal => "natal",
            Self::Transit => "transit",
        }
    }
}

/// Chart geometry family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayConvention {
    /// Fixed diamond; cells are houses and signs rotate through them.
    NorthIndian,
    /// Fixed 4x4 ring; cells are signs and never move.
    SouthIndian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Place bodies by natal sign.
    Rashi,
    /// Place bodies by house membership.
    BhavaChalit,
}

/// A celestial point to be placed on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    /// Sidereal longitude in degrees, `[0, 360]`.
    pub longitude: Option<f64>,
    /// 0-based sign, consulted only when `longitude` is absent.
    pub sign_index: Option<u8>,
    /// House pre-assigned upstream, 1..=12.
    pub house_number: Option<u8>,
    pub is_retrograde: bool,
    pub origin: BodyOrigin,
}

impl Body {
    #[must_use]
    pub fn natal(name: impl Into<String>, longitude: f64) -> Self {
        Self::at_longitude(name, longitude, BodyOrigin::Natal)
    }

    #[must_use]
    pub fn transit(name: impl Into<String>, longitude: f64) -> Self {
        Self::at_longitude(name, longitude, BodyOrigin::Transit)
    }

    #[must_use]
    pub fn at_longitude(name: impl Into<String>, longitude: f64, origin: BodyOrigin) -> Self {
        Self {
            name: name.into(),
            longitude: Some(longitude),
            sign_index: None,
            house_number: None,
            is_retrograde: false,
            origin,
        }
    }

    /// Body known only by its sign, as some upstream feeds deliver it.
    #[must_use]
    pub fn in_sign(name: impl Into<String>, sign_index: u8, origin: BodyOrigin) -> Self {
        Self {
            name: name.into(),
            longitude: None,
            sign_index: Some(sign_index),
            house_number: None,
            is_retrograde: false,
            origin,
        }
    }

    /// Body known only by its pre-assigned house, for Bhava Chalit feeds.
    #[must_use]
    pub fn in_house(name: impl Into<String>, house_number: u8, origin: BodyOrigin) -> Self {
        Self {
            name: name.into(),
            longitude: None,
            sign_index: None,
            house_number: Some(house_number),
            is_retrograde: false,
            origin,
        }
    }

    pub fn from_decimal_longitude(
        name: impl Into<String>,
        longitude: Decimal,
        origin: BodyOrigin,
    ) -> LayoutResult<Self> {
        let longitude = decimal_to_f64(longitude, "longitude")?;
        Ok(Self::at_longitude(name, longitude, origin))
    }

    #[must_use]
    pub fn with_house(mut self, house_number: u8) -> Self {
        self.house_number = Some(house_number);
        self
    }

    #[must_use]
    pub fn with_retrograde(mut self, is_retrograde: bool) -> Self {
        self.is_retrograde = is_retrograde;
        self
    }

    /// Validated longitude, when the body carries one.
    pub fn checked_longitude(&self) -> LayoutResult<Option<f64>> {
        self.longitude
            .map(|value| validate_longitude(value, &self.name))
            .transpose()
    }

    /// Resolved sign: derived from the longitude when present, otherwise the
    /// explicit sign index.
    pub fn sign(&self) -> LayoutResult<ZodiacSign> {
        if let Some(longitude) = self.checked_longitude()? {
            return ZodiacSign::from_index(sign_index_for_longitude(longitude));
        }
        match self.sign_index {
            Some(index) => ZodiacSign::from_index(index),
            None => Err(LayoutError::MissingPosition {
                name: self.name.clone(),
                needed: "a longitude or sign index",
            }),
        }
    }

    /// Checks each field that is present. A body needs no particular field
    /// here; the placement strategy decides which position it requires.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.name.trim().is_empty() {
            return Err(LayoutError::InvalidData(
                "body name must not be empty".to_owned(),
            ));
        }
        if let Some(index) = self.sign_index {
            ZodiacSign::from_index(index)?;
        }
        if let Some(house) = self.house_number {
            crate::core::rotation::validate_house(house)?;
        }
        self.checked_longitude()?;
        Ok(())
    }
}

/// The rising sign anchoring house 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ascendant {
    pub sign: ZodiacSign,
    /// Set when the sign was not supplied and Aries was assumed.
    #[serde(default)]
    pub fallback: bool,
}

impl Default for Ascendant {
    fn default() -> Self {
        Self {
            sign: ZodiacSign::Aries,
            fallback: true,
        }
    }
}

impl Ascendant {
    #[must_use]
    pub const fn new(sign: ZodiacSign) -> Self {
        Self {
            sign,
            fallback: false,
        }
    }

    /// Missing index falls back to Aries; an out-of-range index is an error.
    pub fn from_index(index: Option<u8>) -> LayoutResult<Self> {
        match index {
            Some(index) => Ok(Self::new(ZodiacSign::from_index(index)?)),
            None => {
                warn!("ascendant sign missing; assuming Aries");
                Ok(Self::default())
            }
        }
    }

    /// Missing or unrecognized names fall back to Aries.
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        match name.and_then(ZodiacSign::parse_name) {
            Some(sign) => Self::new(sign),
            None => {
                warn!(name = ?name, "ascendant sign unknown; assuming Aries");
                Self::default()
            }
        }
    }

    /// Ascendant sign derived from the rising degree.
    pub fn from_longitude(longitude: f64) -> LayoutResult<Self> {
        let longitude = validate_longitude(longitude, "ascendant")?;
        Ok(Self::new(ZodiacSign::from_longitude(longitude)))
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.sign.index()
    }

    #[must_use]
    pub const fn is_fallback(self) -> bool {
        self.fallback
    }
}
