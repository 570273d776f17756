use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines how a map is viewed: which magnification
/// levels are available, where to start, and whether to draw tile labels.
/// A config is turned into a live view via [MapView::new](crate::MapView::new),
/// which validates it first.
///
/// Every field has a default, so a config file only needs to specify what it
/// wants to change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_initial_scale"))]
pub struct ViewConfig {
    /// Tile side length (in pixels) for each scale, from the first scale to
    /// the last. There must be at least one, and every side must be positive.
    /// Usually these increase, so that stepping up through the scales zooms
    /// in, but that isn't enforced.
    #[validate(length(min = 1), custom = "validate_scales")]
    pub scales: Vec<u32>,

    /// Index into `scales` of the scale the view starts at
    pub initial_scale: usize,

    /// Should tiles be drawn with their labels?
    pub show_labels: bool,
}

impl ViewConfig {
    /// Number of default scales
    pub const DEFAULT_SCALE_COUNT: u32 = 5;
    /// Side length of the smallest default scale. Each default scale after
    /// this one doubles the previous.
    pub const DEFAULT_BASE_SIDE: u32 = 32;
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            // 32, 64, 128, 256, 512
            scales: (0..Self::DEFAULT_SCALE_COUNT)
                .map(|i| Self::DEFAULT_BASE_SIDE << i)
                .collect(),
            initial_scale: 0,
            show_labels: true,
        }
    }
}

fn validate_scales(scales: &[u32]) -> Result<(), ValidationError> {
    if scales.iter().all(|side| *side > 0) {
        Ok(())
    } else {
        Err(ValidationError::new("zero_side"))
    }
}

fn validate_initial_scale(config: &ViewConfig) -> Result<(), ValidationError> {
    if config.initial_scale < config.scales.len() {
        Ok(())
    } else {
        Err(ValidationError::new("initial_scale_out_of_range"))
    }
}
