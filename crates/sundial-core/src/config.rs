//! Static per-instance configuration
//!
//! One `CycleConfig` is built when the scene object is created and never
//! changes afterwards. Construction is where misconfiguration is absorbed:
//! non-positive cycle lengths clamp to the minimum and negative intensity
//! clamps to zero, so the per-frame path never revalidates.

use crate::time::CycleLength;

/// Configuration for one day/night cycle instance.
#[derive(Clone, Debug)]
pub struct CycleConfig {
    /// Duration of one full day/night cycle.
    pub cycle_length: CycleLength,
    /// Maximum sun intensity, reached with the sun overhead.
    pub sun_intensity: f32,
    /// Multiplier applied to grab-position deltas when rotating the lever.
    pub rotation_speed: f32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        CycleConfig {
            cycle_length: CycleLength::default(),
            sun_intensity: 1.0,
            rotation_speed: 1.0,
        }
    }
}

impl CycleConfig {
    /// Build a config from raw values, clamping out-of-range inputs
    /// instead of failing.
    pub fn new(cycle_secs: f32, sun_intensity: f32, rotation_speed: f32) -> Self {
        CycleConfig {
            cycle_length: CycleLength::new(cycle_secs),
            sun_intensity: if sun_intensity.is_finite() {
                sun_intensity.max(0.0)
            } else {
                0.0
            },
            rotation_speed,
        }
    }

    /// Short demo cycle, useful in tests and scene previews.
    pub fn short_demo() -> Self {
        CycleConfig::new(120.0, 1.0, 1.0)
    }
}
