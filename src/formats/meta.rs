use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{AxisDescriptor, AxisKind, ChannelInfo, FrameIndexModel, ModelError};

use super::Result;

/// Viewer metadata document describing one multi-dimensional image.
///
/// Field names follow the tile server's wire format (`sizeX`, `IndexRange`,
/// `IndexStride`, `channelmap`); unrecognized fields are preserved verbatim
/// in `extras`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageMeta {
    #[serde(rename = "sizeX")]
    pub size_x: usize,
    #[serde(rename = "sizeY")]
    pub size_y: usize,
    #[serde(rename = "IndexRange", default)]
    pub index_range: BTreeMap<String, usize>,
    #[serde(rename = "IndexStride", default)]
    pub index_stride: BTreeMap<String, usize>,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub channelmap: BTreeMap<String, usize>,
    #[serde(flatten)]
    pub extras: BTreeMap<String, Value>,
}

impl ImageMeta {
    /// Axis descriptors for every declared index, ranges paired with their
    /// strides. Unknown axis names and missing strides are rejected.
    pub fn axes(&self) -> Result<Vec<AxisDescriptor>> {
        let mut axes = Vec::with_capacity(self.index_range.len());
        for (name, range) in &self.index_range {
            let kind: AxisKind = name.parse()?;
            let stride = self.index_stride.get(name).copied().ok_or_else(|| {
                ModelError::InvalidMetadata(format!("axis {name} declares no stride"))
            })?;
            axes.push(AxisDescriptor::new(kind, *range, stride));
        }
        Ok(axes)
    }

    /// Channel states in declaration order; numbers come from `channelmap`
    /// when present, list position otherwise.
    pub fn channel_infos(&self) -> Vec<ChannelInfo> {
        self.channels
            .iter()
            .enumerate()
            .map(|(position, name)| {
                let number = self.channelmap.get(name).copied().unwrap_or(position);
                ChannelInfo::new(name.clone(), number)
            })
            .collect()
    }

    /// Total frames addressed by the declared index ranges.
    pub fn frame_count(&self) -> usize {
        self.index_range.values().product()
    }

    /// Build a validated selection model for a session on this image.
    pub fn build_model(&self) -> Result<FrameIndexModel> {
        Ok(FrameIndexModel::new(self.axes()?, self.channel_infos())?)
    }
}
