use std::fs::File;
use std::path::Path;

use log::info;
use ndarray::Array3;
use tiff::decoder::{Decoder, DecodingResult};

use super::stack::FrameStack;
use super::{IoError, Result};

pub(crate) fn read_tiff_stack(path: &Path) -> Result<FrameStack> {
    let file = File::open(path)?;
    let mut decoder = Decoder::new(file)?;
    let (width, height) = decoder.dimensions()?;
    let mut values = Vec::new();
    let mut frames = 0usize;

    loop {
        let (page_width, page_height) = decoder.dimensions()?;
        if page_width != width || page_height != height {
            return Err(IoError::UnsupportedLayout(
                "TIFF pages must have identical dimensions".into(),
            ));
        }
        decode_tiff_page(&mut decoder, width, height, &mut values)?;
        frames += 1;
        if !decoder.more_images() {
            break;
        }
        decoder.next_image()?;
    }

    info!(
        "read {frames} frame(s) of {width}x{height} from {}",
        path.display()
    );
    let data = Array3::from_shape_vec((frames, height as usize, width as usize), values)
        .expect("page size checked per frame");
    FrameStack::new(data)
}

fn decode_tiff_page(
    decoder: &mut Decoder<File>,
    width: u32,
    height: u32,
    values: &mut Vec<f32>,
) -> Result<()> {
    let expected = width as usize * height as usize;
    match decoder.read_image()? {
        DecodingResult::U8(buffer) => {
            if buffer.len() != expected {
                return Err(IoError::UnsupportedLayout(
                    "TIFF RGB/alpha pages are not supported".into(),
                ));
            }
            values.extend(buffer.into_iter().map(|value| f32::from(value) / 255.0));
        }
        DecodingResult::U16(buffer) => {
            if buffer.len() != expected {
                return Err(IoError::UnsupportedLayout(
                    "TIFF RGB/alpha pages are not supported".into(),
                ));
            }
            values.extend(buffer.into_iter().map(|value| f32::from(value) / 65_535.0));
        }
        DecodingResult::F32(buffer) => {
            if buffer.len() != expected {
                return Err(IoError::UnsupportedLayout(
                    "TIFF RGB/alpha pages are not supported".into(),
                ));
            }
            values.extend(buffer);
        }
        other => {
            return Err(IoError::UnsupportedLayout(format!(
                "unsupported TIFF sample type: {other:?}"
            )));
        }
    }
    Ok(())
}
