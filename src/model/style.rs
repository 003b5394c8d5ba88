use serde::{Deserialize, Serialize};

/// One band of the style descriptor handed to the rendering backend.
///
/// `palette` is present only for false-colored channels; `min`/`max` are
/// omitted while the window sits at the 0/1 defaults so the backend skips
/// rescaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandSpec {
    pub frame: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f32>,
}

impl BandSpec {
    pub fn bare(frame: usize) -> Self {
        Self {
            frame,
            palette: None,
            min: None,
            max: None,
        }
    }
}

/// The style document a rendering backend accepts (`{"bands": [...]}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSpec {
    pub bands: Vec<BandSpec>,
}
