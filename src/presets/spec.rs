use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::{
    AxisKind, FrameIndexModel, ModelError, SelectionMode, StylePatch, validate_window,
};

use super::{PresetError, Result};

/// Saved style of one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelPreset {
    pub name: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub false_color: Option<String>,
    #[serde(default)]
    pub min: f32,
    #[serde(default = "default_max")]
    pub max: f32,
}

fn default_max() -> f32 {
    1.0
}

/// Serializable snapshot of a viewer session: selection mode, per-axis
/// positions, and per-channel styles. Round-trips as JSON or YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub mode: SelectionMode,
    /// Axis metadata spelling ("IndexZ") to selected index.
    #[serde(default)]
    pub axes: BTreeMap<String, usize>,
    #[serde(default)]
    pub channels: Vec<ChannelPreset>,
}

impl ViewPreset {
    /// Snapshot the current state of a model.
    pub fn from_model(model: &FrameIndexModel) -> Self {
        Self {
            name: None,
            mode: model.mode(),
            axes: model
                .axes()
                .iter()
                .map(|axis| (axis.kind.to_string(), axis.current))
                .collect(),
            channels: model
                .channels()
                .iter()
                .map(|channel| ChannelPreset {
                    name: channel.name.clone(),
                    enabled: channel.enabled,
                    false_color: channel.false_color.clone(),
                    min: channel.min,
                    max: channel.max,
                })
                .collect(),
        }
    }

    /// Structural checks that need no model: axis names must parse,
    /// channel names must be unique, windows must be well-formed, and the
    /// enabled set must respect the selection mode.
    pub fn validate(&self) -> Result<()> {
        for name in self.axes.keys() {
            name.parse::<AxisKind>()?;
        }
        for (index, channel) in self.channels.iter().enumerate() {
            if self.channels[..index]
                .iter()
                .any(|other| other.name == channel.name)
            {
                return Err(PresetError::Parse(format!(
                    "duplicate channel `{}`",
                    channel.name
                )));
            }
            validate_window(channel.min, channel.max)?;
        }
        let enabled = self
            .channels
            .iter()
            .filter(|channel| channel.enabled)
            .count();
        if self.mode == SelectionMode::Single && enabled > 1 {
            return Err(PresetError::Parse(
                "a single-mode preset may enable at most one channel".to_string(),
            ));
        }
        Ok(())
    }

    /// Restore this snapshot onto a model.
    ///
    /// The preset is validated against the model before any mutation, so
    /// a preset that does not fit leaves the model untouched.
    pub fn apply(&self, model: &mut FrameIndexModel) -> Result<()> {
        self.validate()?;

        for (name, value) in &self.axes {
            let kind: AxisKind = name.parse()?;
            let axis = model
                .axis(kind)
                .ok_or(ModelError::UnknownAxis { axis: kind })?;
            if *value >= axis.range {
                return Err(ModelError::IndexOutOfRange {
                    axis: kind,
                    value: *value,
                    range: axis.range,
                }
                .into());
            }
        }
        let mut enabled: BTreeSet<&str> = model
            .channels()
            .iter()
            .filter(|channel| channel.enabled)
            .map(|channel| channel.name.as_str())
            .collect();
        for channel in &self.channels {
            if !model.channels().iter().any(|c| c.name == channel.name) {
                return Err(ModelError::UnknownChannel(channel.name.clone()).into());
            }
            if channel.enabled {
                enabled.insert(&channel.name);
            } else {
                enabled.remove(channel.name.as_str());
            }
        }
        if !model.channels().is_empty() && enabled.is_empty() {
            return Err(PresetError::Parse(
                "preset leaves no channel enabled".to_string(),
            ));
        }

        model.set_mode(self.mode);
        for (name, value) in &self.axes {
            let kind: AxisKind = name.parse()?;
            model.set_axis_current(kind, *value)?;
        }
        // Enable before disabling so the at-least-one invariant holds at
        // every step.
        for channel in &self.channels {
            if channel.enabled {
                model.toggle_channel(&channel.name, true)?;
            }
        }
        for channel in &self.channels {
            if !channel.enabled && model_has_enabled(model, &channel.name) {
                model.toggle_channel(&channel.name, false)?;
            }
        }
        for channel in &self.channels {
            model.set_channel_style(
                &channel.name,
                &StylePatch {
                    false_color: channel.false_color.clone(),
                    min: Some(channel.min),
                    max: Some(channel.max),
                },
            )?;
        }
        Ok(())
    }
}

fn model_has_enabled(model: &FrameIndexModel, name: &str) -> bool {
    model
        .channels()
        .iter()
        .any(|channel| channel.name == name && channel.enabled)
}
