use std::fs;
use std::path::Path;

use log::info;

use super::{Result, ViewPreset};

pub fn load_preset(path: impl AsRef<Path>) -> Result<ViewPreset> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let preset = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::from_str::<ViewPreset>(&raw)?
    } else {
        serde_json::from_str::<ViewPreset>(&raw)?
    };
    preset.validate()?;
    info!("loaded preset from {}", path.display());
    Ok(preset)
}

pub fn save_preset(path: impl AsRef<Path>, preset: &ViewPreset) -> Result<()> {
    let path = path.as_ref();
    preset.validate()?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let serialized = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::to_string(preset)?
    } else {
        serde_json::to_string_pretty(preset)?
    };
    fs::write(path, serialized)?;
    Ok(())
}
