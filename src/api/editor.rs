use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    Model, ParamDefinition, ParamId, ParamKind, ParamStore, StoreWrite, export_model,
};
use crate::error::EditorResult;
use crate::render::Renderer;

use super::ParamEditorConfig;

/// One edit coming from the host's input handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditEvent {
    pub param_id: ParamId,
    pub value: String,
}

impl EditEvent {
    #[must_use]
    pub fn new(param_id: ParamId, value: impl Into<String>) -> Self {
        Self {
            param_id,
            value: value.into(),
        }
    }
}

/// A definition paired with the value currently shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub param_id: ParamId,
    pub display_name: &'a str,
    pub kind: ParamKind,
    pub value: &'a str,
}

/// Main facade consumed by host applications.
///
/// `ParamEditor` owns the parameter schema, the model it was seeded from, the
/// live value store and the renderer. Edits go through `update`; the current
/// model is pulled with `get_model`.
pub struct ParamEditor<R: Renderer> {
    pub(super) renderer: R,
    definitions: Vec<ParamDefinition>,
    original: Model,
    store: ParamStore,
    revision: u64,
}

impl<R: Renderer> ParamEditor<R> {
    #[must_use]
    pub fn new(renderer: R, definitions: Vec<ParamDefinition>, model: Model) -> Self {
        let store = ParamStore::initialize(&model);
        debug!(
            definitions = definitions.len(),
            seeded_values = store.len(),
            colors = model.colors.len(),
            "param editor initialized"
        );
        Self {
            renderer,
            definitions,
            original: model,
            store,
            revision: 0,
        }
    }

    /// Validates `config` and builds an editor from it.
    pub fn from_config(renderer: R, config: ParamEditorConfig) -> EditorResult<Self> {
        config.validate()?;
        Ok(Self::new(renderer, config.definitions, config.model))
    }

    #[must_use]
    pub fn definitions(&self) -> &[ParamDefinition] {
        &self.definitions
    }

    /// The model the editor was seeded from, untouched by later edits.
    #[must_use]
    pub fn original_model(&self) -> &Model {
        &self.original
    }

    #[must_use]
    pub fn store(&self) -> &ParamStore {
        &self.store
    }

    /// Number of edits applied since construction.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Sets the value of `param_id`, appending it when it is not stored yet.
    ///
    /// Ids without a matching definition are accepted.
    pub fn update(&mut self, param_id: ParamId, value: impl Into<String>) -> StoreWrite {
        let write = self.store.update(param_id, value);
        self.revision += 1;
        if write == StoreWrite::Appended && !self.is_defined(param_id) {
            trace!(param_id, "stored value for parameter without definition");
        }
        write
    }

    pub fn handle_edit(&mut self, event: EditEvent) -> StoreWrite {
        self.update(event.param_id, event.value)
    }

    #[must_use]
    pub fn value(&self, param_id: ParamId) -> &str {
        self.store.read(param_id)
    }

    /// Current model: edited parameter values plus the original colors.
    #[must_use]
    pub fn get_model(&self) -> Model {
        export_model(&self.original, &self.store)
    }

    /// One view per definition, in definition order.
    #[must_use]
    pub fn fields(&self) -> Vec<FieldView<'_>> {
        self.definitions
            .iter()
            .map(|definition| FieldView {
                param_id: definition.id,
                display_name: &definition.display_name,
                kind: definition.kind,
                value: self.store.read(definition.id),
            })
            .collect()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn is_defined(&self, param_id: ParamId) -> bool {
        self.definitions
            .iter()
            .any(|definition| definition.id == param_id)
    }
}
