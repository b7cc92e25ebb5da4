//! Scene-facing interfaces
//!
//! Each trait covers one external collaborator the behaviors consume.
//! Hosts implement these against their engine objects; tests implement
//! them as recording fakes. Every optional collaborator is held as an
//! `Option` on the behavior, and a missing one skips exactly its own side
//! effect.

use sundial_core::{Rgb, Vec3};

/// Position source for the controlling participant.
pub trait Tracking {
    /// Is the participant in a VR modality (tracked hands available)?
    fn is_in_vr(&self) -> bool;

    /// Dominant-hand tracked position.
    fn hand_position(&self) -> Vec3;

    /// Head position and normalized facing direction.
    fn head_pose(&self) -> (Vec3, Vec3);
}

/// Where the participant is reaching: the tracked hand in VR, otherwise
/// the head position projected one unit along the facing direction.
pub fn reach_position(tracking: &dyn Tracking) -> Vec3 {
    if tracking.is_in_vr() {
        tracking.hand_position()
    } else {
        let (position, forward) = tracking.head_pose();
        position + forward
    }
}

/// The directional light standing in for the sun.
pub trait SunLamp {
    /// Mark the light as directional. Called once at behavior creation.
    fn set_directional(&mut self);

    /// Rotation about the horizontal axis in degrees; yaw and roll stay
    /// zero.
    fn set_pitch(&mut self, degrees: f32);

    fn set_intensity(&mut self, intensity: f32);

    fn set_color(&mut self, color: Rgb);
}

/// UI slider holding a normalized `[0, 1]` time-of-day value.
pub trait TimeSlider {
    fn value(&self) -> f32;

    fn set_value(&mut self, value: f32);

    /// Allow or forbid user input on the widget.
    fn set_interactable(&mut self, interactable: bool);
}

/// Scoped feedback clip tied to the lever.
pub trait FeedbackAudio {
    fn play(&mut self);

    fn stop(&mut self);
}

/// A scene object whose visibility the lever flips.
pub trait ToggleTarget {
    fn is_active(&self) -> bool;

    fn set_active(&mut self, active: bool);
}

/// The lever's visual transform.
pub trait LeverHandle {
    /// Rotation about the vertical axis in degrees.
    fn set_yaw(&mut self, degrees: f32);
}
