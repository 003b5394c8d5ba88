use std::path::Path;

use crate::formats::{self, FrameStack, ImageMeta};

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct IoService;

impl IoService {
    pub fn read_meta(&self, path: impl AsRef<Path>) -> Result<ImageMeta> {
        Ok(formats::read_meta(path)?)
    }

    pub fn read_stack(&self, path: impl AsRef<Path>) -> Result<FrameStack> {
        Ok(formats::read_stack(path)?)
    }
}
