use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::render::{LinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass on a square surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub surface_size: f64,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(surface_size: f64) -> Self {
        Self {
            surface_size,
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> LayoutResult<()> {
        if !self.surface_size.is_finite() || self.surface_size <= 0.0 {
            return Err(LayoutError::InvalidData(
                "surface size must be finite and > 0".to_owned(),
            ));
        }

        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.texts.is_empty()
    }
}
