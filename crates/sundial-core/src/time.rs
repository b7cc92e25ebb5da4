//! Cycle-time primitives
//!
//! Sundial measures scene time in seconds through one day/night cycle:
//! - `CycleLength`: configured duration of a full cycle, validated at
//!   construction so downstream division is always safe
//! - `TimeOfDay`: normalized progress through the current cycle in `[0, 1)`

use std::fmt;

/// Smallest accepted cycle length in seconds.
///
/// A configured length at or below zero would make every normalization a
/// division by zero; construction clamps to this floor instead.
pub const MIN_CYCLE_SECS: f32 = 1.0;

/// Duration of one full day/night cycle, in seconds. Always positive.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct CycleLength(f32);

impl CycleLength {
    /// Create a cycle length, clamping non-positive or sub-minimum values
    /// to [`MIN_CYCLE_SECS`]. NaN is treated as misconfiguration and also
    /// clamps to the floor.
    pub fn new(secs: f32) -> Self {
        if secs.is_finite() && secs >= MIN_CYCLE_SECS {
            CycleLength(secs)
        } else {
            CycleLength(MIN_CYCLE_SECS)
        }
    }

    #[inline]
    pub fn as_secs(self) -> f32 {
        self.0
    }

    /// Normalize an elapsed-seconds value against this cycle.
    #[inline]
    pub fn normalize(self, elapsed_secs: f32) -> TimeOfDay {
        TimeOfDay::from_elapsed(elapsed_secs, self)
    }
}

impl Default for CycleLength {
    fn default() -> Self {
        CycleLength::new(120.0)
    }
}

impl fmt::Debug for CycleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CycleLength({:.1}s)", self.0)
    }
}

/// Normalized progress through the current cycle, domain `[0, 1)`.
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct TimeOfDay(f32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0.0);

    /// Wrap an arbitrary fraction into `[0, 1)`.
    ///
    /// Guarded against `rem_euclid` rounding a tiny negative input up to
    /// exactly 1.0, which would leave the domain.
    #[inline]
    pub fn from_fraction(fraction: f32) -> Self {
        let wrapped = fraction.rem_euclid(1.0);
        TimeOfDay(if wrapped >= 1.0 { 0.0 } else { wrapped })
    }

    /// Normalize elapsed seconds against a cycle length.
    #[inline]
    pub fn from_elapsed(elapsed_secs: f32, length: CycleLength) -> Self {
        Self::from_fraction(elapsed_secs / length.as_secs())
    }

    #[inline]
    pub fn as_fraction(self) -> f32 {
        self.0
    }

    /// Convert back to elapsed seconds for a given cycle length.
    #[inline]
    pub fn to_elapsed(self, length: CycleLength) -> f32 {
        self.0 * length.as_secs()
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:.3})", self.0)
    }
}
