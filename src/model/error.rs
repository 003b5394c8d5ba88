use thiserror::Error;

use super::AxisKind;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("axis {axis} is not part of this image")]
    UnknownAxis { axis: AxisKind },

    #[error("index {value} is out of range for axis {axis} (range {range})")]
    IndexOutOfRange {
        axis: AxisKind,
        value: usize,
        range: usize,
    },

    #[error("frame {frame} is out of range (last frame is {max})")]
    FrameOutOfRange { frame: usize, max: usize },

    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    #[error("cannot disable `{0}`: at least one channel must stay enabled")]
    LastEnabledChannel(String),

    #[error("invalid intensity window: min {min} and max {max} must satisfy 0 <= min <= max <= 1")]
    InvalidWindow { min: f32, max: f32 },

    #[error("invalid image metadata: {0}")]
    InvalidMetadata(String),
}
