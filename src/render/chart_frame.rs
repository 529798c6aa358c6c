use serde::{Deserialize, Serialize};

use crate::core::DisplayConvention;
use crate::error::{LayoutError, LayoutResult};
use crate::placement::{ChartPlacement, LabelConfig, SlotLayoutConfig, format_body_label, slot_position};
use crate::render::grid::SURFACE_SIZE;
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive, TextRole};

/// Sizes used when turning a placement into primitives.
///
/// `surface_size` is the output square side; every other length is given in
/// 400-unit reference space and scaled with the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameMetrics {
    pub surface_size: f64,
    pub stroke_width: f64,
    pub sign_font_size: f64,
    pub body_font_size: f64,
    pub slot_layout: SlotLayoutConfig,
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self {
            surface_size: SURFACE_SIZE,
            stroke_width: 1.0,
            sign_font_size: 10.0,
            body_font_size: 12.0,
            slot_layout: SlotLayoutConfig::default(),
        }
    }
}

impl FrameMetrics {
    pub(crate) fn validate(self) -> LayoutResult<Self> {
        for (value, name) in [
            (self.surface_size, "surface_size"),
            (self.stroke_width, "stroke_width"),
            (self.sign_font_size, "sign_font_size"),
            (self.body_font_size, "body_font_size"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidData(format!(
                    "frame metric `{name}` must be finite and > 0"
                )));
            }
        }
        self.slot_layout.validate()?;
        Ok(self)
    }
}

/// Builds the outline, sign glyphs, ascendant marker and body labels for a
/// placement.
pub fn build_render_frame(
    placement: &ChartPlacement,
    metrics: FrameMetrics,
    labels: &LabelConfig,
) -> LayoutResult<RenderFrame> {
    let metrics = metrics.validate()?;
    let convention = placement.request.convention;
    let ascendant = placement.request.ascendant;
    let scale = metrics.surface_size / SURFACE_SIZE;
    let mut frame = RenderFrame::new(metrics.surface_size);

    for (from, to) in convention.outline_segments() {
        let (from, to) = (from.scaled(scale), to.scaled(scale));
        frame = frame.with_line(LinePrimitive::new(
            from.x,
            from.y,
            to.x,
            to.y,
            metrics.stroke_width,
        ));
    }

    for cell in convention.cells() {
        let sign = convention.sign_in_cell(ascendant, cell.cell)?;
        let text = match convention {
            DisplayConvention::NorthIndian => sign.number().to_string(),
            DisplayConvention::SouthIndian => sign.abbreviation().to_owned(),
        };
        let anchor = cell.label_anchor.scaled(scale);
        frame = frame.with_text(TextPrimitive::new(
            text,
            anchor.x,
            anchor.y,
            metrics.sign_font_size * scale,
            TextHAlign::Center,
            TextRole::SignLabel,
        ));
    }

    let asc_anchor = convention.label_anchor(placement.ascendant_cell())?;
    frame = frame.with_text(TextPrimitive::new(
        "Asc",
        asc_anchor.x * scale,
        (asc_anchor.y + metrics.slot_layout.line_height) * scale,
        metrics.sign_font_size * scale,
        TextHAlign::Center,
        TextRole::AscendantMarker,
    ));

    let groups = placement.cell_groups();
    for entry in placement.entries() {
        let center = convention.cell_center(entry.cell)?;
        let count = groups.get(&entry.cell).map_or(0, |group| group.len());
        let position = slot_position(center, entry.slot_index, count, metrics.slot_layout)?
            .scaled(scale);
        frame = frame.with_text(TextPrimitive::new(
            format_body_label(entry, labels),
            position.x,
            position.y,
            metrics.body_font_size * scale,
            TextHAlign::Center,
            TextRole::Body {
                origin: entry.origin,
                cell: entry.cell,
                slot_index: entry.slot_index,
            },
        ));
    }

    Ok(frame)
}
