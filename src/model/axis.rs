use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ModelError, Result};

/// Frame axes a viewer metadata document may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxisKind {
    Channel,
    Z,
    Time,
    Xy,
}

impl AxisKind {
    /// Metadata spelling of the axis ("IndexC", "IndexZ", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisKind::Channel => "IndexC",
            AxisKind::Z => "IndexZ",
            AxisKind::Time => "IndexT",
            AxisKind::Xy => "IndexXY",
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for AxisKind {
    type Err = ModelError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "IndexC" | "C" => Ok(AxisKind::Channel),
            "IndexZ" | "Z" => Ok(AxisKind::Z),
            "IndexT" | "T" => Ok(AxisKind::Time),
            "IndexXY" | "XY" => Ok(AxisKind::Xy),
            other => Err(ModelError::InvalidMetadata(format!(
                "unknown axis name: {other}"
            ))),
        }
    }
}

/// One frame axis: its length, its multiplier into the linear frame
/// number, and the currently selected index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisDescriptor {
    pub kind: AxisKind,
    pub range: usize,
    pub stride: usize,
    pub current: usize,
}

impl AxisDescriptor {
    pub fn new(kind: AxisKind, range: usize, stride: usize) -> Self {
        Self {
            kind,
            range,
            stride,
            current: 0,
        }
    }
}
