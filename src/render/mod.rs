mod frame;
mod null_renderer;

pub use frame::{FormFrame, InputRow};
pub use null_renderer::NullRenderer;

use crate::error::EditorResult;

/// Contract implemented by any form drawing backend.
///
/// Backends receive a fully materialized `FormFrame`, so toolkit code stays
/// isolated from the value store and edit handling.
pub trait Renderer {
    fn render(&mut self, frame: &FormFrame) -> EditorResult<()>;
}
