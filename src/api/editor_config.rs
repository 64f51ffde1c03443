use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::{Model, ParamDefinition};
use crate::error::{EditorError, EditorResult};

/// Public editor bootstrap configuration.
///
/// Serializable so hosts can keep form schemas and seed models as JSON
/// instead of building them in code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParamEditorConfig {
    #[serde(default)]
    pub definitions: Vec<ParamDefinition>,
    #[serde(default)]
    pub model: Model,
}

impl ParamEditorConfig {
    #[must_use]
    pub fn new(definitions: Vec<ParamDefinition>) -> Self {
        Self {
            definitions,
            model: Model::default(),
        }
    }

    /// Sets the initial model the editor is seeded from.
    #[must_use]
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub fn with_definition(mut self, definition: ParamDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Checks that every definition id is unique.
    ///
    /// Model values without a matching definition are allowed.
    pub fn validate(&self) -> EditorResult<()> {
        let mut seen = HashSet::with_capacity(self.definitions.len());
        for definition in &self.definitions {
            if !seen.insert(definition.id) {
                return Err(EditorError::DuplicateDefinition {
                    param_id: definition.id,
                });
            }
        }
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> EditorResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EditorError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> EditorResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| EditorError::InvalidData(format!("failed to parse config: {e}")))
    }
}
