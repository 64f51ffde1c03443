use crate::core::{Model, ParamStore};

/// Projects the live store onto an exportable model snapshot.
///
/// `param_values` is a fresh copy of the store's ordered entries and `colors`
/// is taken from `original` unchanged. The result owns all of its data.
#[must_use]
pub fn export_model(original: &Model, store: &ParamStore) -> Model {
    Model {
        param_values: store.values(),
        colors: original.colors.clone(),
    }
}
