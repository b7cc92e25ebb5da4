//! Cycle clock - the authoritative elapsed-time accumulator
//!
//! INVARIANT: `elapsed` is in `[0, cycle_length)` after every mutation
//! except [`CycleClock::sync_to`], which accepts the owner's replicated
//! value verbatim.

use sundial_core::{CycleLength, TimeOfDay};

/// Wrap a value into `[0, length)`.
///
/// `rem_euclid` alone is not enough: for a tiny negative input the add-back
/// of `length` rounds up to exactly `length`, which is outside the domain.
#[inline]
fn wrap(value: f32, length: f32) -> f32 {
    let wrapped = value.rem_euclid(length);
    if wrapped >= length {
        0.0
    } else {
        wrapped
    }
}

/// Elapsed-time accumulator for one day/night cycle instance.
///
/// Only the current owner of the scene object advances this clock;
/// observers call [`sync_to`](CycleClock::sync_to) with received snapshot
/// values and otherwise treat it as read-only.
#[derive(Clone, Debug)]
pub struct CycleClock {
    /// Seconds into the current cycle.
    elapsed: f32,
    /// Configured cycle duration.
    length: CycleLength,
}

impl CycleClock {
    /// Create a clock at the start of the cycle.
    pub fn new(length: CycleLength) -> Self {
        CycleClock {
            elapsed: 0.0,
            length,
        }
    }

    /// Seconds into the current cycle.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn length(&self) -> CycleLength {
        self.length
    }

    /// Normalized progress through the current cycle.
    #[inline]
    pub fn time_of_day(&self) -> TimeOfDay {
        self.length.normalize(self.elapsed)
    }

    /// Advance by a frame delta scaled by a signed direction and a
    /// normalized speed, then wrap back into the cycle.
    ///
    /// Wrapping uses a true Euclidean modulo, so a frame delta larger than
    /// the cycle length (a host stall) still lands in range; for bounded
    /// deltas the result matches a single conditional add/subtract.
    /// Returns the new elapsed value.
    pub fn advance(&mut self, dt_secs: f32, direction: f32, speed: f32) -> f32 {
        self.elapsed = wrap(
            self.elapsed + dt_secs * direction * speed,
            self.length.as_secs(),
        );
        self.elapsed
    }

    /// Advance in plain automatic mode: forward, real-time rate.
    #[inline]
    pub fn advance_auto(&mut self, dt_secs: f32) -> f32 {
        self.advance(dt_secs, 1.0, 1.0)
    }

    /// Pin elapsed time to a normalized slider value in `[0, 1]`.
    ///
    /// A value of exactly 1.0 wraps to 0.0; both render identically.
    pub fn set_normalized(&mut self, fraction: f32) -> f32 {
        self.elapsed = wrap(fraction * self.length.as_secs(), self.length.as_secs());
        self.elapsed
    }

    /// Overwrite elapsed time wholesale with a replicated value.
    ///
    /// Observer-side only: no merge, no smoothing, last received wins.
    #[inline]
    pub fn sync_to(&mut self, elapsed_secs: f32) {
        self.elapsed = elapsed_secs;
    }
}
