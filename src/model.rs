mod axis;
mod channel;
mod error;
mod events;
mod selector;
mod style;

#[cfg(test)]
mod tests;

pub use axis::{AxisDescriptor, AxisKind};
pub(crate) use channel::validate_window;
pub use channel::{ChannelInfo, SelectionMode, StylePatch};
pub use error::{ModelError, Result};
pub use events::{EventHub, ModelEvent};
pub use selector::FrameIndexModel;
pub use style::{BandSpec, StyleSpec};
