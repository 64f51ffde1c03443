use tracing::trace;

use crate::error::EditorResult;
use crate::render::{FormFrame, InputRow, Renderer};

use super::ParamEditor;

impl<R: Renderer> ParamEditor<R> {
    /// Materializes one input row per definition with its current value.
    #[must_use]
    pub fn build_form_frame(&self) -> FormFrame {
        self.fields()
            .into_iter()
            .fold(FormFrame::new(), |frame, field| {
                frame.with_row(InputRow::new(
                    field.param_id,
                    field.display_name,
                    field.kind,
                    field.value,
                ))
            })
    }

    pub fn render(&mut self) -> EditorResult<()> {
        let frame = self.build_form_frame();
        frame.validate()?;
        trace!(rows = frame.rows.len(), revision = self.revision(), "render form");
        self.renderer.render(&frame)
    }
}
