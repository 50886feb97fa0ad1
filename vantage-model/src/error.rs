/// Errors produced by model constructors and validation routines.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
