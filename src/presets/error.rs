use crate::model::ModelError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PresetError>;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("invalid preset: {0}")]
    Parse(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON preset failure: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML preset failure: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("preset does not fit this image: {0}")]
    Model(#[from] ModelError),
}
