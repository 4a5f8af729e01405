//! Engine tuning knobs.

use crate::snap::SNAP_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Minimum element width/height in pixels.
pub const MIN_SIZE: f64 = 8.0;
/// Keyboard nudge distance in pixels.
pub const NUDGE_STEP: f64 = 1.0;
/// Keyboard nudge distance in pixels with Shift held.
pub const NUDGE_STEP_LARGE: f64 = 10.0;

/// Per-instance engine configuration.
///
/// Every field has a default, so a partial JSON object is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Distance within which an edge or center snaps to a guide.
    pub snap_threshold: f64,
    /// Minimum element width/height.
    pub min_size: f64,
    pub nudge_step: f64,
    pub nudge_step_large: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            snap_threshold: SNAP_THRESHOLD,
            min_size: MIN_SIZE,
            nudge_step: NUDGE_STEP,
            nudge_step_large: NUDGE_STEP_LARGE,
        }
    }
}

impl EngineConfig {
    /// Replace negative or non-finite values with the defaults.
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let pick = |value: f64, fallback: f64| {
            if value.is_finite() && value >= 0.0 { value } else { fallback }
        };
        Self {
            snap_threshold: pick(self.snap_threshold, defaults.snap_threshold),
            min_size: pick(self.min_size, defaults.min_size),
            nudge_step: pick(self.nudge_step, defaults.nudge_step),
            nudge_step_large: pick(self.nudge_step_large, defaults.nudge_step_large),
        }
    }

    /// Builder-style setter for the snap threshold.
    pub fn with_snap_threshold(mut self, threshold: f64) -> Self {
        self.snap_threshold = threshold;
        self
    }

    /// Builder-style setter for the minimum size.
    pub fn with_min_size(mut self, min_size: f64) -> Self {
        self.min_size = min_size;
        self
    }

    /// Nudge distance for the given Shift state.
    pub fn nudge_distance(&self, large: bool) -> f64 {
        if large { self.nudge_step_large } else { self.nudge_step }
    }
}
