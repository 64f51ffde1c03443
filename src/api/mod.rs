//! Host-facing editor API.

mod editor;
mod editor_config;
mod form_frame_builder;
mod harness;
mod json_contract;

pub use editor::{EditEvent, FieldView, ParamEditor};
pub use editor_config::ParamEditorConfig;
pub use harness::{ChangeCheck, ChangeExpectation, CheckOutcome, CheckReport};
pub use json_contract::{MODEL_SNAPSHOT_JSON_SCHEMA_V1, ModelSnapshotJsonContractV1};
