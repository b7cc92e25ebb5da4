//! Recording fakes for the scene-facing traits
//!
//! Every fake keeps its state behind a shared handle: the behavior owns a
//! boxed clone, the test keeps the original and observes writes through
//! it.

use std::sync::Arc;

use parking_lot::Mutex;
use sundial_core::{Rgb, Vec3};
use sundial_runtime::{FeedbackAudio, LeverHandle, SunLamp, TimeSlider, ToggleTarget, Tracking};

/// Observed state of a [`FakeSunLamp`].
#[derive(Default)]
pub struct SunLampState {
    pub directional: bool,
    pub pitch_deg: f32,
    pub intensity: f32,
    pub color: Option<Rgb>,
}

#[derive(Clone, Default)]
pub struct FakeSunLamp(pub Arc<Mutex<SunLampState>>);

impl SunLamp for FakeSunLamp {
    fn set_directional(&mut self) {
        self.0.lock().directional = true;
    }

    fn set_pitch(&mut self, degrees: f32) {
        self.0.lock().pitch_deg = degrees;
    }

    fn set_intensity(&mut self, intensity: f32) {
        self.0.lock().intensity = intensity;
    }

    fn set_color(&mut self, color: Rgb) {
        self.0.lock().color = Some(color);
    }
}

/// Observed state of a [`FakeTimeSlider`].
#[derive(Default)]
pub struct TimeSliderState {
    pub value: f32,
    pub interactable: bool,
}

#[derive(Clone, Default)]
pub struct FakeTimeSlider(pub Arc<Mutex<TimeSliderState>>);

impl FakeTimeSlider {
    /// Simulate the user dragging the widget.
    pub fn drag_to(&self, value: f32) {
        self.0.lock().value = value;
    }

    pub fn current(&self) -> f32 {
        self.0.lock().value
    }

    pub fn is_interactable(&self) -> bool {
        self.0.lock().interactable
    }
}

impl TimeSlider for FakeTimeSlider {
    fn value(&self) -> f32 {
        self.0.lock().value
    }

    fn set_value(&mut self, value: f32) {
        self.0.lock().value = value;
    }

    fn set_interactable(&mut self, interactable: bool) {
        self.0.lock().interactable = interactable;
    }
}

/// Observed state of a [`FakeAudio`].
#[derive(Default)]
pub struct AudioState {
    pub playing: bool,
    pub plays: u32,
    pub stops: u32,
}

#[derive(Clone, Default)]
pub struct FakeAudio(pub Arc<Mutex<AudioState>>);

impl FakeAudio {
    pub fn is_playing(&self) -> bool {
        self.0.lock().playing
    }
}

impl FeedbackAudio for FakeAudio {
    fn play(&mut self) {
        let mut state = self.0.lock();
        state.playing = true;
        state.plays += 1;
    }

    fn stop(&mut self) {
        let mut state = self.0.lock();
        state.playing = false;
        state.stops += 1;
    }
}

#[derive(Clone)]
pub struct FakeToggle(pub Arc<Mutex<bool>>);

impl FakeToggle {
    pub fn starting(active: bool) -> Self {
        FakeToggle(Arc::new(Mutex::new(active)))
    }

    pub fn is_active(&self) -> bool {
        *self.0.lock()
    }
}

impl ToggleTarget for FakeToggle {
    fn is_active(&self) -> bool {
        *self.0.lock()
    }

    fn set_active(&mut self, active: bool) {
        *self.0.lock() = active;
    }
}

#[derive(Clone, Default)]
pub struct FakeLeverHandle(pub Arc<Mutex<f32>>);

impl FakeLeverHandle {
    pub fn yaw(&self) -> f32 {
        *self.0.lock()
    }
}

impl LeverHandle for FakeLeverHandle {
    fn set_yaw(&mut self, degrees: f32) {
        *self.0.lock() = degrees;
    }
}

/// Tracking fake: a movable hand, VR or desktop modality.
pub struct TrackingState {
    pub in_vr: bool,
    pub hand: Vec3,
    pub head: Vec3,
    pub forward: Vec3,
}

impl Default for TrackingState {
    fn default() -> Self {
        TrackingState {
            in_vr: true,
            hand: Vec3::ZERO,
            head: Vec3::new(0.0, 1.6, 0.0),
            forward: Vec3::new(0.0, 0.0, 1.0),
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeTracking(pub Arc<Mutex<TrackingState>>);

impl FakeTracking {
    pub fn desktop() -> Self {
        let tracking = FakeTracking::default();
        tracking.0.lock().in_vr = false;
        tracking
    }

    /// Move the tracked hand, the drag input for the lever.
    pub fn move_hand(&self, to: Vec3) {
        self.0.lock().hand = to;
    }
}

impl Tracking for FakeTracking {
    fn is_in_vr(&self) -> bool {
        self.0.lock().in_vr
    }

    fn hand_position(&self) -> Vec3 {
        self.0.lock().hand
    }

    fn head_pose(&self) -> (Vec3, Vec3) {
        let state = self.0.lock();
        (state.head, state.forward)
    }
}
