//! Structural diff between two model snapshots.
//!
//! Parameter values are matched by id; order changes alone are not reported.
//! Colors are opaque here, so only a single "changed" flag is tracked.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Model, ParamId, ParamValue};

/// A parameter whose value differs between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueChange {
    pub param_id: ParamId,
    pub old_value: String,
    pub new_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModelDiff {
    pub changed: Vec<ValueChange>,
    pub added: Vec<ParamValue>,
    pub removed: Vec<ParamValue>,
    pub colors_changed: bool,
}

impl ModelDiff {
    /// Computes the diff from `old` to `new`.
    ///
    /// `changed` and `removed` follow the order of `old`; `added` follows `new`.
    #[must_use]
    pub fn compute(old: &Model, new: &Model) -> Self {
        let old_values = index_values(&old.param_values);
        let new_values = index_values(&new.param_values);

        let mut changed = Vec::new();
        let mut removed = Vec::new();
        for (param_id, old_value) in &old_values {
            match new_values.get(param_id) {
                Some(new_value) if new_value != old_value => changed.push(ValueChange {
                    param_id: *param_id,
                    old_value: (*old_value).to_owned(),
                    new_value: (*new_value).to_owned(),
                }),
                Some(_) => {}
                None => removed.push(ParamValue::new(*param_id, *old_value)),
            }
        }

        let added = new_values
            .iter()
            .filter(|(param_id, _)| !old_values.contains_key(*param_id))
            .map(|(param_id, value)| ParamValue::new(*param_id, *value))
            .collect();

        Self {
            changed,
            added,
            removed,
            colors_changed: old.colors != new.colors,
        }
    }

    /// True when every id maps to the same value on both sides and colors match.
    ///
    /// Two models that differ only in value order or in duplicate ids that
    /// collapse to the same value produce an empty diff.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
            && self.added.is_empty()
            && self.removed.is_empty()
            && !self.colors_changed
    }

    /// Number of parameter ids touched by the diff.
    #[must_use]
    pub fn param_change_count(&self) -> usize {
        self.changed.len() + self.added.len() + self.removed.len()
    }
}

// Last write wins for duplicate ids, matching how the store seeds itself.
fn index_values(values: &[ParamValue]) -> IndexMap<ParamId, &str> {
    let mut index = IndexMap::with_capacity(values.len());
    for entry in values {
        index.insert(entry.param_id, entry.value.as_str());
    }
    index
}
