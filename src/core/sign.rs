//! The twelve zodiac signs (rashis) in zodiacal order.
//!
//! Signs are numbered 1..=12 (Aries = 1 .. Pisces = 12) for display and
//! indexed 0..=11 for arithmetic. Each sign spans exactly 30 degrees of
//! longitude starting from Aries at 0 degrees.

use serde::{Deserialize, Serialize};

use crate::core::primitives::sign_index_for_longitude;
use crate::error::{LayoutError, LayoutResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub static ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

static SANSKRIT_NAMES: [&str; 12] = [
    "Mesha",
    "Vrishabha",
    "Mithuna",
    "Karka",
    "Simha",
    "Kanya",
    "Tula",
    "Vrischika",
    "Dhanu",
    "Makara",
    "Kumbha",
    "Meena",
];

static ABBREVIATIONS: [&str; 12] = [
    "Ar", "Ta", "Ge", "Cn", "Le", "Vi", "Li", "Sc", "Sg", "Cp", "Aq", "Pi",
];

impl ZodiacSign {
    pub fn from_index(index: u8) -> LayoutResult<Self> {
        ALL_SIGNS
            .get(usize::from(index))
            .copied()
            .ok_or(LayoutError::SignIndexOutOfRange { index })
    }

    pub fn from_number(number: u8) -> LayoutResult<Self> {
        if !(1..=12).contains(&number) {
            return Err(LayoutError::SignNumberOutOfRange { number });
        }
        Ok(ALL_SIGNS[usize::from(number - 1)])
    }

    /// Sign containing an already validated longitude.
    #[must_use]
    pub fn from_longitude(longitude: f64) -> Self {
        ALL_SIGNS[usize::from(sign_index_for_longitude(longitude))]
    }

    /// Parses an English name, Sanskrit name, or abbreviation, ignoring case.
    #[must_use]
    pub fn parse_name(name: &str) -> Option<Self> {
        let needle = name.trim();
        if needle.is_empty() {
            return None;
        }
        ALL_SIGNS.iter().copied().find(|sign| {
            sign.name().eq_ignore_ascii_case(needle)
                || sign.sanskrit_name().eq_ignore_ascii_case(needle)
                || sign.abbreviation().eq_ignore_ascii_case(needle)
        })
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (Aries = 1 .. Pisces = 12).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    #[must_use]
    pub fn sanskrit_name(self) -> &'static str {
        SANSKRIT_NAMES[usize::from(self.index())]
    }

    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        ABBREVIATIONS[usize::from(self.index())]
    }

    /// The sign `steps` positions further along the zodiac, wrapping at Pisces.
    #[must_use]
    pub fn advance(self, steps: u8) -> Self {
        ALL_SIGNS[(usize::from(self.index()) + usize::from(steps % 12)) % 12]
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
