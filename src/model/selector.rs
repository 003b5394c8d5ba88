use super::channel::validate_window;
use super::{
    AxisDescriptor, AxisKind, BandSpec, ChannelInfo, EventHub, ModelError, ModelEvent, Result,
    SelectionMode, StylePatch, StyleSpec,
};

/// Frame/channel selection model for one open viewer session.
///
/// Owns the axis descriptors and channel states, converts between the
/// per-axis index tuple and the linear frame number, and derives the band
/// specs a rendering backend composites. Views observe mutations through
/// [`EventHub`]. All operations are synchronous; rejected input leaves the
/// model unchanged.
#[derive(Debug)]
pub struct FrameIndexModel {
    /// Sorted by stride, smallest first.
    axes: Vec<AxisDescriptor>,
    /// Sorted by channel number.
    channels: Vec<ChannelInfo>,
    mode: SelectionMode,
    events: EventHub,
}

impl FrameIndexModel {
    /// Build a model from metadata-derived parts.
    ///
    /// Axis strides must form a mixed-radix encoding: sorted by stride the
    /// smallest is 1 and each next stride is the previous `stride * range`.
    /// Channel numbers must be unique and fit the channel axis. When the
    /// metadata enables no channel, the lowest-numbered one is enabled so
    /// the at-least-one-enabled invariant holds from the start.
    pub fn new(mut axes: Vec<AxisDescriptor>, mut channels: Vec<ChannelInfo>) -> Result<Self> {
        axes.sort_by_key(|axis| axis.stride);
        validate_axes(&axes)?;
        channels.sort_by_key(|channel| channel.number);
        let channel_range = axes
            .iter()
            .find(|axis| axis.kind == AxisKind::Channel)
            .map(|axis| axis.range);
        validate_channels(&channels, channel_range)?;
        if !channels.is_empty() && !channels.iter().any(|channel| channel.enabled) {
            channels[0].enabled = true;
        }
        Ok(Self {
            axes,
            channels,
            mode: SelectionMode::default(),
            events: EventHub::new(),
        })
    }

    pub fn axes(&self) -> &[AxisDescriptor] {
        &self.axes
    }

    pub fn axis(&self, kind: AxisKind) -> Option<&AxisDescriptor> {
        self.axes.iter().find(|axis| axis.kind == kind)
    }

    pub fn channels(&self) -> &[ChannelInfo] {
        &self.channels
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn events(&self) -> &EventHub {
        &self.events
    }

    /// The linear frame number: the weighted sum of every axis's
    /// `current * stride`.
    pub fn linear_frame(&self) -> usize {
        self.axes.iter().map(|axis| axis.current * axis.stride).sum()
    }

    pub fn max_frame(&self) -> usize {
        self.axes
            .iter()
            .map(|axis| (axis.range - 1) * axis.stride)
            .sum()
    }

    /// Move one axis to `value` and return the new linear frame number.
    pub fn set_axis_current(&mut self, kind: AxisKind, value: usize) -> Result<usize> {
        let axis = self
            .axes
            .iter_mut()
            .find(|axis| axis.kind == kind)
            .ok_or(ModelError::UnknownAxis { axis: kind })?;
        if value >= axis.range {
            return Err(ModelError::IndexOutOfRange {
                axis: kind,
                value,
                range: axis.range,
            });
        }
        axis.current = value;
        let frame = self.linear_frame();
        self.events.emit(ModelEvent::FrameChanged { frame });
        Ok(frame)
    }

    /// Drive every axis from a linear frame number (the inverse of
    /// [`Self::linear_frame`], exact thanks to construction-time stride
    /// validation).
    pub fn set_linear_frame(&mut self, frame: usize) -> Result<()> {
        let max = self.max_frame();
        if frame > max {
            return Err(ModelError::FrameOutOfRange { frame, max });
        }
        for axis in &mut self.axes {
            axis.current = (frame / axis.stride) % axis.range;
        }
        self.events.emit(ModelEvent::FrameChanged { frame });
        Ok(())
    }

    /// Switching to single-channel mode keeps only the lowest-numbered
    /// enabled channel.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        if mode == SelectionMode::Single
            && let Some(keep) = self.channels.iter().position(|channel| channel.enabled)
        {
            for (index, channel) in self.channels.iter_mut().enumerate() {
                channel.enabled = index == keep;
            }
        }
        self.events.emit(ModelEvent::ModeChanged { mode });
        self.emit_style_changed();
    }

    /// Enable or disable a channel under the current selection mode.
    ///
    /// In single mode enabling a channel disables every other; disabling
    /// the sole enabled channel is rejected in either mode.
    pub fn toggle_channel(&mut self, name: &str, enabled: bool) -> Result<()> {
        let index = self.channel_index(name)?;
        if !enabled {
            let enabled_count = self
                .channels
                .iter()
                .filter(|channel| channel.enabled)
                .count();
            if self.channels[index].enabled && enabled_count == 1 {
                return Err(ModelError::LastEnabledChannel(name.to_string()));
            }
            self.channels[index].enabled = false;
        } else if self.mode == SelectionMode::Single {
            for (other, channel) in self.channels.iter_mut().enumerate() {
                channel.enabled = other == index;
            }
        } else {
            self.channels[index].enabled = true;
        }
        self.emit_style_changed();
        Ok(())
    }

    /// Apply a partial style update to one channel.
    ///
    /// The resulting window is validated as a whole, so a rejected patch
    /// applies none of its fields.
    pub fn set_channel_style(&mut self, name: &str, patch: &StylePatch) -> Result<()> {
        let index = self.channel_index(name)?;
        let channel = &self.channels[index];
        let min = patch.min.unwrap_or(channel.min);
        let max = patch.max.unwrap_or(channel.max);
        validate_window(min, max)?;
        let channel = &mut self.channels[index];
        channel.min = min;
        channel.max = max;
        if let Some(color) = &patch.false_color {
            channel.false_color = Some(color.clone());
        }
        self.emit_style_changed();
        Ok(())
    }

    /// One band per enabled channel, ordered by channel number.
    ///
    /// Each band's frame is the current linear frame with the channel-axis
    /// coordinate replaced by the channel's number; without a channel axis
    /// every band points at the current frame.
    pub fn band_specs(&self) -> Vec<BandSpec> {
        let base = self.linear_frame();
        let channel_axis = self.axis(AxisKind::Channel).copied();
        self.channels
            .iter()
            .filter(|channel| channel.enabled)
            .map(|channel| {
                let frame = match channel_axis {
                    Some(axis) => base - axis.current * axis.stride + channel.number * axis.stride,
                    None => base,
                };
                let windowed = !channel.has_default_window();
                BandSpec {
                    frame,
                    palette: channel.false_color.clone(),
                    min: windowed.then_some(channel.min),
                    max: windowed.then_some(channel.max),
                }
            })
            .collect()
    }

    pub fn style_spec(&self) -> StyleSpec {
        StyleSpec {
            bands: self.band_specs(),
        }
    }

    fn emit_style_changed(&self) {
        self.events.emit(ModelEvent::StyleChanged {
            bands: self.band_specs(),
        });
    }

    fn channel_index(&self, name: &str) -> Result<usize> {
        self.channels
            .iter()
            .position(|channel| channel.name == name)
            .ok_or_else(|| ModelError::UnknownChannel(name.to_string()))
    }
}

fn validate_axes(axes: &[AxisDescriptor]) -> Result<()> {
    let mut expected_stride = 1;
    for (index, axis) in axes.iter().enumerate() {
        if axis.range == 0 || axis.stride == 0 {
            return Err(ModelError::InvalidMetadata(format!(
                "axis {} must have a positive range and stride",
                axis.kind
            )));
        }
        if axes[..index].iter().any(|other| other.kind == axis.kind) {
            return Err(ModelError::InvalidMetadata(format!(
                "duplicate axis {}",
                axis.kind
            )));
        }
        if axis.current >= axis.range {
            return Err(ModelError::IndexOutOfRange {
                axis: axis.kind,
                value: axis.current,
                range: axis.range,
            });
        }
        if axis.stride != expected_stride {
            return Err(ModelError::InvalidMetadata(format!(
                "axis {} stride {} breaks the mixed-radix layout (expected {expected_stride})",
                axis.kind, axis.stride
            )));
        }
        expected_stride *= axis.range;
    }
    Ok(())
}

fn validate_channels(channels: &[ChannelInfo], channel_range: Option<usize>) -> Result<()> {
    for (index, channel) in channels.iter().enumerate() {
        if channels[..index]
            .iter()
            .any(|other| other.number == channel.number || other.name == channel.name)
        {
            return Err(ModelError::InvalidMetadata(format!(
                "duplicate channel `{}` (number {})",
                channel.name, channel.number
            )));
        }
        if let Some(range) = channel_range
            && channel.number >= range
        {
            return Err(ModelError::InvalidMetadata(format!(
                "channel `{}` number {} exceeds the channel axis range {range}",
                channel.name, channel.number
            )));
        }
        validate_window(channel.min, channel.max)?;
    }
    Ok(())
}
