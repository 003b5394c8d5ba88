use ndarray::{Array3, ArrayView2, Axis};

use super::{IoError, Result};

/// Grayscale frame stack shaped `(frames, height, width)`, values
/// normalized to `[0, 1]`. Band specs index into the first axis.
#[derive(Debug, Clone)]
pub struct FrameStack {
    data: Array3<f32>,
}

impl FrameStack {
    pub fn new(data: Array3<f32>) -> Result<Self> {
        let (frames, height, width) = data.dim();
        if frames == 0 || height == 0 || width == 0 {
            return Err(IoError::UnsupportedLayout("empty frame stack".into()));
        }
        Ok(Self { data })
    }

    pub fn frame_count(&self) -> usize {
        self.data.dim().0
    }

    pub fn height(&self) -> usize {
        self.data.dim().1
    }

    pub fn width(&self) -> usize {
        self.data.dim().2
    }

    pub fn frame(&self, index: usize) -> Option<ArrayView2<'_, f32>> {
        (index < self.frame_count()).then(|| self.data.index_axis(Axis(0), index))
    }
}
