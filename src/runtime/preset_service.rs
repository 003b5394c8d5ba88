use std::path::Path;

use crate::presets::{self, ViewPreset};

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct PresetService;

impl PresetService {
    pub fn load(&self, path: impl AsRef<Path>) -> Result<ViewPreset> {
        Ok(presets::load_preset(path)?)
    }

    pub fn save(&self, path: impl AsRef<Path>, preset: &ViewPreset) -> Result<()> {
        Ok(presets::save_preset(path, preset)?)
    }
}
