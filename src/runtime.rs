mod annotation_service;
mod context;
mod error;
mod io_service;
mod preset_service;
mod render_service;

pub use annotation_service::AnnotationService;
pub use context::AppContext;
pub use error::{AppError, Result};
pub use io_service::IoService;
pub use preset_service::PresetService;
pub use render_service::RenderService;
