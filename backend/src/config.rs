use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::track::angle::Policy;

const DEFAULT_TOLERANCE_PX: f32 = 50.0;
const DEFAULT_STEP: i32 = 10;
const DEFAULT_PIXELS_PER_CM: f32 = 38.0;
const DEFAULT_REFERENCE_DISTANCE_CM: f32 = 100.0;
const DEFAULT_MIN_ANGLE_DEG: f32 = 1.0;

/// Tracking tunables. Both axes share one tolerance unless the per-axis
/// overrides are set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    pub policy: Policy,
    /// Dead-zone radius in pixels around the frame center.
    pub tolerance_px: f32,
    pub tolerance_px_x: Option<f32>,
    pub tolerance_px_y: Option<f32>,
    /// Fixed-step policy: command magnitude per off-center cycle.
    pub step: i32,
    /// Continuous policy: sensor-plane scale at the reference distance.
    pub pixels_per_cm: f32,
    /// Continuous policy: assumed camera-to-target distance.
    pub reference_distance_cm: f32,
    /// Continuous policy: angular dead zone in degrees.
    pub min_angle_deg: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            tolerance_px: DEFAULT_TOLERANCE_PX,
            tolerance_px_x: None,
            tolerance_px_y: None,
            step: DEFAULT_STEP,
            pixels_per_cm: DEFAULT_PIXELS_PER_CM,
            reference_distance_cm: DEFAULT_REFERENCE_DISTANCE_CM,
            min_angle_deg: DEFAULT_MIN_ANGLE_DEG,
        }
    }
}

impl TrackerConfig {
    pub fn load(path: &Path) -> crate::Result<Self> {
        Ok(toml::from_str(&fs::read_to_string(path)?)?)
    }

    pub fn tolerance_x(&self) -> f32 {
        self.tolerance_px_x.unwrap_or(self.tolerance_px)
    }

    pub fn tolerance_y(&self) -> f32 {
        self.tolerance_px_y.unwrap_or(self.tolerance_px)
    }
}
