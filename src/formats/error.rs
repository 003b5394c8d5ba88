use crate::model::ModelError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IoError>;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("unsupported stack layout: {0}")]
    UnsupportedLayout(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("metadata parse failure: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TIFF decode failure: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("model construction failure: {0}")]
    Model(#[from] ModelError),
}
