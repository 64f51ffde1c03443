use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{Model, ParamId, ParamValue};

/// Outcome of a single `ParamStore::update` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreWrite {
    /// The id was not present and was appended at the end.
    Appended,
    /// The id was present; its value was replaced in place.
    Replaced,
}

/// Ordered in-memory mapping from parameter id to its current string value.
///
/// Iteration order is first-seen order. Replacing a value keeps the slot of the
/// existing entry, so the exported sequence only ever grows at the tail.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParamStore {
    values: IndexMap<ParamId, String>,
}

impl ParamStore {
    /// Seeds a store from the model's parameter values.
    ///
    /// The values are copied, so later edits never reach the caller's model.
    /// Duplicate ids in the input collapse onto the first slot with the last value.
    #[must_use]
    pub fn initialize(model: &Model) -> Self {
        let mut values = IndexMap::with_capacity(model.param_values.len());
        for entry in &model.param_values {
            values.insert(entry.param_id, entry.value.clone());
        }
        if values.len() != model.param_values.len() {
            debug!(
                original_count = model.param_values.len(),
                canonical_count = values.len(),
                "collapsed duplicate parameter values while seeding store"
            );
        }
        Self { values }
    }

    pub fn update(&mut self, param_id: ParamId, value: impl Into<String>) -> StoreWrite {
        let write = match self.values.insert(param_id, value.into()) {
            Some(_) => StoreWrite::Replaced,
            None => StoreWrite::Appended,
        };
        trace!(param_id, ?write, count = self.values.len(), "update parameter value");
        write
    }

    /// Current value for `param_id`, or `""` when it was never set.
    #[must_use]
    pub fn read(&self, param_id: ParamId) -> &str {
        self.values.get(&param_id).map_or("", String::as_str)
    }

    #[must_use]
    pub fn contains(&self, param_id: ParamId) -> bool {
        self.values.contains_key(&param_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParamId, &str)> + '_ {
        self.values.iter().map(|(id, value)| (*id, value.as_str()))
    }

    /// Fresh ordered copy of the stored entries.
    #[must_use]
    pub fn values(&self) -> Vec<ParamValue> {
        self.iter()
            .map(|(param_id, value)| ParamValue::new(param_id, value))
            .collect()
    }
}
