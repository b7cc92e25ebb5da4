//! Lever - clamped angle accumulator and grip state machine
//!
//! The lever maps a user's grab motion onto the time-advance policy:
//! deflection sign picks the direction of time, deflection magnitude picks
//! the rate. The angle persists across grip sessions; releasing the lever
//! leaves it where it was.

use sundial_core::Vec3;

/// Maximum lever deflection in degrees, either side of center.
pub const LEVER_LIMIT_DEG: f32 = 45.0;

/// Grip state of the lever.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grip {
    /// Nobody is holding the lever.
    Idle,
    /// The local participant is holding the lever.
    Engaged,
}

/// Interactive lever state.
///
/// INVARIANT: `angle` stays in `[-LEVER_LIMIT_DEG, LEVER_LIMIT_DEG]` after
/// every update, regardless of input deltas.
#[derive(Clone, Debug)]
pub struct Lever {
    /// Current deflection in degrees.
    angle: f32,
    /// Grip state; toggles strictly on discrete interact events.
    grip: Grip,
    /// Previous-frame grab position, present only while engaged.
    last_grab: Option<Vec3>,
    /// Multiplier applied to grab-position deltas.
    rotation_speed: f32,
}

impl Lever {
    pub fn new(rotation_speed: f32) -> Self {
        Lever {
            angle: 0.0,
            grip: Grip::Idle,
            last_grab: None,
            rotation_speed,
        }
    }

    /// Current deflection in degrees.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn grip(&self) -> Grip {
        self.grip
    }

    #[inline]
    pub fn is_engaged(&self) -> bool {
        self.grip == Grip::Engaged
    }

    /// Start a grip session, sampling the grab position for the first
    /// frame's delta. The angle is untouched.
    pub fn engage(&mut self, at: Vec3) {
        self.grip = Grip::Engaged;
        self.last_grab = Some(at);
    }

    /// End the grip session. The angle persists.
    pub fn release(&mut self) {
        self.grip = Grip::Idle;
        self.last_grab = None;
    }

    /// Apply one frame of grab motion while engaged.
    ///
    /// The horizontal component of the position delta, scaled by the
    /// rotation speed, rotates the lever; the result is clamped to the
    /// deflection limit. Returns the new angle for the host to apply as
    /// the lever's yaw, or `None` when the lever is not held.
    pub fn drag(&mut self, to: Vec3) -> Option<f32> {
        let from = self.last_grab?;
        let delta = (to - from).x * self.rotation_speed;
        self.angle = (self.angle + delta).clamp(-LEVER_LIMIT_DEG, LEVER_LIMIT_DEG);
        self.last_grab = Some(to);
        Some(self.angle)
    }

    /// Signed direction of time advance: -1, 0, or +1.
    ///
    /// Exactly centered means no movement, matching the zero speed below.
    #[inline]
    pub fn direction(&self) -> f32 {
        if self.angle == 0.0 {
            0.0
        } else {
            self.angle.signum()
        }
    }

    /// Normalized advance rate in `[0, 1]`: full deflection is real time.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.angle.abs() / LEVER_LIMIT_DEG
    }
}
