mod chart_frame;
mod frame;
pub mod grid;
mod null_renderer;
mod primitives;

pub use chart_frame::{FrameMetrics, build_render_frame};
pub use frame::RenderFrame;
pub use grid::{GridCell, SURFACE_SIZE};
pub use null_renderer::NullRenderer;
pub use primitives::{LinePrimitive, TextHAlign, TextPrimitive, TextRole};

use crate::error::LayoutResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from placement logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> LayoutResult<()>;
}
