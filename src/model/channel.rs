use serde::{Deserialize, Serialize};

use super::{ModelError, Result};

/// How channels may be enabled: exactly one, or any non-empty subset
/// blended into a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Composite,
}

/// Compositing state of one named channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelInfo {
    pub name: String,
    pub number: usize,
    pub enabled: bool,
    pub false_color: Option<String>,
    pub min: f32,
    pub max: f32,
}

impl ChannelInfo {
    pub fn new(name: impl Into<String>, number: usize) -> Self {
        Self {
            name: name.into(),
            number,
            enabled: false,
            false_color: None,
            min: 0.0,
            max: 1.0,
        }
    }

    /// True when the window sits at the 0/1 defaults and a backend can
    /// skip rescaling entirely.
    pub fn has_default_window(&self) -> bool {
        self.min == 0.0 && self.max == 1.0
    }
}

/// Partial style update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylePatch {
    pub false_color: Option<String>,
    pub min: Option<f32>,
    pub max: Option<f32>,
}

pub(crate) fn validate_window(min: f32, max: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min > max {
        return Err(ModelError::InvalidWindow { min, max });
    }
    Ok(())
}
