use serde::{Deserialize, Serialize};

use crate::core::BodyOrigin;
use crate::error::{LayoutError, LayoutResult};

/// Draw command for one line segment in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
        }
    }

    pub fn validate(self) -> LayoutResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(LayoutError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(LayoutError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// What a label means, so backends can style it without a second lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextRole {
    SignLabel,
    AscendantMarker,
    Body { origin: BodyOrigin, cell: u8, slot_index: usize },
}

/// Draw command for one label in surface units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub h_align: TextHAlign,
    pub role: TextRole,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size: f64,
        h_align: TextHAlign,
        role: TextRole,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            h_align,
            role,
        }
    }

    pub fn validate(&self) -> LayoutResult<()> {
        if self.text.is_empty() {
            return Err(LayoutError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(LayoutError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(LayoutError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
