use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("no input received for {prompt:?}")]
    NoInput { prompt: &'static str },
    #[error("expected exactly one letter, got {0:?}")]
    InvalidLetter(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
