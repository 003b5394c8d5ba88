use crate::annotations::AnnotationError;
use crate::formats::IoError;
use crate::model::ModelError;
use crate::presets::PresetError;
use crate::render::RenderError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("I/O service error: {0}")]
    Io(#[from] IoError),

    #[error("render service error: {0}")]
    Render(#[from] RenderError),

    #[error("annotation service error: {0}")]
    Annotation(#[from] AnnotationError),

    #[error("preset service error: {0}")]
    Preset(#[from] PresetError),
}
