use thiserror::Error;

use crate::window::WindowMode;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unknown window mode: {0}")]
    UnknownMode(String),

    #[error("no {mode} bucket with id '{id}'")]
    UnknownBucket { mode: WindowMode, id: String },

    #[error("screen rendering failed: {0}")]
    Render(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ReportError {
    fn from(e: tera::Error) -> Self {
        ReportError::Render(e.to_string())
    }
}
