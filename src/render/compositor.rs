use std::path::Path;

use image::RgbaImage;
use log::info;
use rayon::prelude::*;

use crate::formats::FrameStack;
use crate::model::BandSpec;

use super::palette::{parse_color, ramp};
use super::{RenderError, Result};

/// Channels without a false color render as a plain grayscale ramp.
const DEFAULT_COLOR: [u8; 3] = [255, 255, 255];

/// Composite every band additively into an opaque RGBA image.
///
/// Each band windows its source frame to `[min, max]` (0/1 when omitted),
/// ramps black to the band color, and adds into the output; sums clamp at
/// white. This mirrors what the tile-serving backend does with the same
/// style descriptor.
pub fn composite(stack: &FrameStack, bands: &[BandSpec]) -> Result<RgbaImage> {
    if bands.is_empty() {
        return Err(RenderError::NoBands);
    }

    let width = stack.width();
    let height = stack.height();

    // Resolve frames, colors, and windows up front so the pixel loop
    // cannot fail.
    let mut resolved = Vec::with_capacity(bands.len());
    for band in bands {
        let frame = stack
            .frame(band.frame)
            .ok_or(RenderError::FrameOutOfRange {
                frame: band.frame,
                frames: stack.frame_count(),
            })?;
        let color = match &band.palette {
            Some(palette) => parse_color(palette)?,
            None => DEFAULT_COLOR,
        };
        let min = band.min.unwrap_or(0.0);
        let max = band.max.unwrap_or(1.0);
        resolved.push((frame, color, min, max));
    }

    let mut accumulator = vec![0.0_f32; width * height * 3];
    accumulator
        .par_chunks_mut(width * 3)
        .enumerate()
        .for_each(|(y, row)| {
            for (frame, color, min, max) in &resolved {
                let span = (max - min).max(f32::EPSILON);
                for x in 0..width {
                    let value = ((frame[[y, x]] - min) / span).clamp(0.0, 1.0);
                    let shaded = ramp(*color, value);
                    row[x * 3] += shaded[0];
                    row[x * 3 + 1] += shaded[1];
                    row[x * 3 + 2] += shaded[2];
                }
            }
        });

    let mut pixels = Vec::with_capacity(width * height * 4);
    for chunk in accumulator.chunks_exact(3) {
        pixels.push(chunk[0].clamp(0.0, 255.0).round() as u8);
        pixels.push(chunk[1].clamp(0.0, 255.0).round() as u8);
        pixels.push(chunk[2].clamp(0.0, 255.0).round() as u8);
        pixels.push(255);
    }
    let image = RgbaImage::from_vec(width as u32, height as u32, pixels)
        .expect("buffer length matches dimensions");
    info!("composited {} band(s) into {width}x{height}", bands.len());
    Ok(image)
}

pub fn write_composite(path: impl AsRef<Path>, image: &RgbaImage) -> Result<()> {
    image.save(path.as_ref())?;
    Ok(())
}
