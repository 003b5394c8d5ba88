use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("band frame {frame} is out of range (stack has {frames} frames)")]
    FrameOutOfRange { frame: usize, frames: usize },

    #[error("style has no bands to composite")]
    NoBands,

    #[error("invalid color `{0}` (expected #rgb or #rrggbb)")]
    BadColor(String),

    #[error("failed to encode output image: {0}")]
    Image(#[from] image::ImageError),
}
