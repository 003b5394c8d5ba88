use std::path::Path;

use image::RgbaImage;

use crate::formats::FrameStack;
use crate::model::BandSpec;
use crate::render;

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct RenderService;

impl RenderService {
    pub fn composite(&self, stack: &FrameStack, bands: &[BandSpec]) -> Result<RgbaImage> {
        Ok(render::composite(stack, bands)?)
    }

    pub fn write(&self, path: impl AsRef<Path>, image: &RgbaImage) -> Result<()> {
        Ok(render::write_composite(path, image)?)
    }
}
