//! Sun position function
//!
//! A pure mapping from normalized time-of-day to the sun's pitch,
//! intensity, and color. Every participant evaluates this each frame from
//! its local elapsed time; owner and observers render the same sky for the
//! same value.
//!
//! The cycle starts mid-morning rather than at the horizon: pitch sweeps
//! one full revolution per cycle with a 40 degree phase offset.

use sundial_core::{lerp, Rgb, TimeOfDay};

/// Pitch at `time_of_day = 0`, in degrees.
pub const DAWN_PITCH_DEG: f32 = 40.0;

/// Night-half tint blended in as the sun sweeps below the horizon.
pub const DUSK_BLUE: Rgb = Rgb {
    r: 0.6,
    g: 0.6,
    b: 1.0,
};

/// Derived render state for the sun light. Recomputed every frame,
/// never stored or replicated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunState {
    /// Rotation about the horizontal axis in degrees, `[0, 360)`.
    /// Yaw and roll are always zero.
    pub pitch_deg: f32,
    /// Final light intensity, `[0, max_intensity]`.
    pub intensity: f32,
    /// Light color: white through the day half, blending toward dusk blue
    /// across the night half.
    pub color: Rgb,
}

/// Evaluate the sun for a normalized time-of-day.
pub fn sun_state(time: TimeOfDay, max_intensity: f32) -> SunState {
    let pitch_deg = lerp(DAWN_PITCH_DEG, DAWN_PITCH_DEG + 360.0, time.as_fraction())
        .rem_euclid(360.0);

    // Peaks overhead at 90 degrees, clamped to zero below the horizon band
    let intensity_factor = (pitch_deg - 90.0).to_radians().cos().clamp(0.0, 1.0);
    let intensity = max_intensity * intensity_factor;

    let color = if pitch_deg < 180.0 {
        Rgb::WHITE
    } else {
        Rgb::WHITE.lerp(DUSK_BLUE, (pitch_deg - 180.0) / 180.0)
    };

    SunState {
        pitch_deg,
        intensity,
        color,
    }
}
