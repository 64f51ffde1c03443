use serde::{Deserialize, Serialize};

use crate::core::Model;
use crate::error::{EditorError, EditorResult};
use crate::render::Renderer;

use super::ParamEditor;

pub const MODEL_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: Model,
}

impl Model {
    pub fn to_json_pretty(&self) -> EditorResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EditorError::InvalidData(format!("failed to serialize model: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> EditorResult<String> {
        let payload = ModelSnapshotJsonContractV1 {
            schema_version: MODEL_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            EditorError::InvalidData(format!("failed to serialize model contract v1: {e}"))
        })
    }

    /// Parses either a bare model or a versioned contract envelope.
    pub fn from_json_compat_str(input: &str) -> EditorResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| EditorError::InvalidData(format!("failed to parse model json: {e}")))?;
        // Every model field defaults, so any object parses as a bare model.
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                EditorError::InvalidData(format!("failed to parse model json payload: {e}"))
            });
        }
        let payload: ModelSnapshotJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            EditorError::InvalidData(format!("failed to parse model contract payload: {e}"))
        })?;
        if payload.schema_version != MODEL_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(EditorError::InvalidData(format!(
                "unsupported model snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ParamEditor<R> {
    /// Serializes the current model as pretty JSON.
    pub fn snapshot_json_pretty(&self) -> EditorResult<String> {
        self.get_model().to_json_pretty()
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> EditorResult<String> {
        self.get_model().to_json_contract_v1_pretty()
    }
}
