//! param-editor: parameter form editing core.
//!
//! The crate keeps edited parameter values in an ordered store, projects them
//! back onto the caller's model on demand, and ships a headless harness for
//! checking that an editing session changed (or preserved) the model.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ParamEditor, ParamEditorConfig};
pub use error::{EditorError, EditorResult};
