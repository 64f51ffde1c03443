pub mod diff;
pub mod model;
pub mod param_store;
pub mod projection;

pub use diff::{ModelDiff, ValueChange};
pub use model::{Color, Model, ParamDefinition, ParamId, ParamKind, ParamValue};
pub use param_store::{ParamStore, StoreWrite};
pub use projection::export_model;
