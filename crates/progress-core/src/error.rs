use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid prompt level: {0:?}")]
    InvalidPromptLevel(String),
}
