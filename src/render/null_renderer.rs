use crate::error::LayoutResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless layout.
///
/// It still validates frame content so tests catch invalid geometry before a
/// real backend draws it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> LayoutResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.frames_rendered += 1;
        Ok(())
    }
}
