use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Stable integer identifier of an editable parameter.
pub type ParamId = i64;

/// Value kind of a parameter definition.
///
/// Only the scalar string kind exists today; the enum stays open so new kinds
/// can be added without breaking callers that match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ParamKind {
    #[default]
    String,
}

/// Schema entry describing one editable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamDefinition {
    pub id: ParamId,
    pub display_name: String,
    #[serde(default)]
    pub kind: ParamKind,
}

impl ParamDefinition {
    #[must_use]
    pub fn new(id: ParamId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            kind: ParamKind::String,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ParamKind) -> Self {
        self.kind = kind;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamValue {
    pub param_id: ParamId,
    pub value: String,
}

impl ParamValue {
    #[must_use]
    pub fn new(param_id: ParamId, value: impl Into<String>) -> Self {
        Self {
            param_id,
            value: value.into(),
        }
    }
}

/// Auxiliary color record carried through the editor untouched.
///
/// Fields beyond `id` and `name` are kept in `extra` in their original order,
/// so a color loaded from JSON serializes back to the same payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Color {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Complete payload exchanged with the hosting application.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(default)]
    pub param_values: Vec<ParamValue>,
    #[serde(default)]
    pub colors: Vec<Color>,
}

impl Model {
    #[must_use]
    pub fn new(param_values: Vec<ParamValue>, colors: Vec<Color>) -> Self {
        Self {
            param_values,
            colors,
        }
    }

    /// Value recorded for `param_id`, if any.
    ///
    /// With duplicate ids the last entry wins, matching `ParamStore::initialize`.
    #[must_use]
    pub fn param_value(&self, param_id: ParamId) -> Option<&str> {
        self.param_values
            .iter()
            .rfind(|entry| entry.param_id == param_id)
            .map(|entry| entry.value.as_str())
    }
}
