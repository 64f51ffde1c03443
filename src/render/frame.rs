use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::{ParamId, ParamKind};
use crate::error::{EditorError, EditorResult};

/// One text input the host should draw for a parameter definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRow {
    pub param_id: ParamId,
    pub label: String,
    pub kind: ParamKind,
    pub value: String,
}

impl InputRow {
    #[must_use]
    pub fn new(
        param_id: ParamId,
        label: impl Into<String>,
        kind: ParamKind,
        value: impl Into<String>,
    ) -> Self {
        Self {
            param_id,
            label: label.into(),
            kind,
            value: value.into(),
        }
    }
}

/// Backend-agnostic description of one form draw pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormFrame {
    pub rows: Vec<InputRow>,
}

impl FormFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_row(mut self, row: InputRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Rejects frames where two rows would bind to the same parameter.
    pub fn validate(&self) -> EditorResult<()> {
        let mut seen = HashSet::with_capacity(self.rows.len());
        for row in &self.rows {
            if !seen.insert(row.param_id) {
                return Err(EditorError::InvalidFrame(format!(
                    "parameter {} is bound to more than one input row",
                    row.param_id
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
