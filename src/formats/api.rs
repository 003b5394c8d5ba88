use std::fs;
use std::path::Path;

use log::info;

use super::meta::ImageMeta;
use super::stack::FrameStack;
use super::tiff::read_tiff_stack;
use super::util::extension;
use super::{IoError, Result};

pub fn read_meta(path: impl AsRef<Path>) -> Result<ImageMeta> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let meta: ImageMeta = serde_json::from_str(&raw)?;
    info!(
        "loaded metadata from {}: {} axes, {} channels",
        path.display(),
        meta.index_range.len(),
        meta.channels.len()
    );
    Ok(meta)
}

pub fn read_stack(path: impl AsRef<Path>) -> Result<FrameStack> {
    let path = path.as_ref();
    let extension = extension(path)?;
    match extension.as_str() {
        "tif" | "tiff" => read_tiff_stack(path),
        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

pub fn supported_stack_formats() -> &'static [&'static str] {
    &["tif", "tiff"]
}
