use crate::error::EditorResult;
use crate::render::{FormFrame, Renderer};

/// No-op renderer used by tests and headless editor usage.
///
/// Frames are still validated, and the last one is kept so tests can inspect
/// what a real backend would have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_frame: Option<FormFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &FormFrame) -> EditorResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
