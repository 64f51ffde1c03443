use thiserror::Error;

pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("duplicate parameter definition: id={param_id}")]
    DuplicateDefinition { param_id: i64 },

    #[error("invalid form frame: {0}")]
    InvalidFrame(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
