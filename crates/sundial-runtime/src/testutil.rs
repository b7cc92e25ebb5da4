//! Recording fakes for behavior unit tests
//!
//! Each fake keeps its state behind a shared handle so tests can observe
//! writes after handing a boxed clone to the behavior.

use std::sync::Arc;

use parking_lot::Mutex;
use sundial_core::{ObjectId, ParticipantId, Rgb, Vec3};
use sundial_sync::{Replication, Snapshot};

use crate::scene::{FeedbackAudio, LeverHandle, SunLamp, TimeSlider, ToggleTarget, Tracking};

#[derive(Default)]
pub struct StubState {
    pub owner: bool,
    pub requests: Vec<(ParticipantId, ObjectId)>,
    pub broadcasts: Vec<Snapshot>,
}

/// Scriptable replication stub: ownership is a settable flag, requests and
/// broadcasts are recorded.
#[derive(Clone, Default)]
pub struct StubReplication(pub Arc<Mutex<StubState>>);

impl StubReplication {
    pub fn owning() -> Self {
        let stub = StubReplication::default();
        stub.0.lock().owner = true;
        stub
    }
}

impl Replication for StubReplication {
    fn is_owner(&self, _participant: ParticipantId, _object: ObjectId) -> bool {
        self.0.lock().owner
    }

    fn request_ownership(&mut self, participant: ParticipantId, object: ObjectId) {
        self.0.lock().requests.push((participant, object));
    }

    fn broadcast(&mut self, _from: ParticipantId, snapshot: Snapshot) {
        self.0.lock().broadcasts.push(snapshot);
    }
}

/// Tracking fake with a movable hand, always in VR.
#[derive(Clone)]
pub struct MovableHand(pub Arc<Mutex<Vec3>>);

impl MovableHand {
    pub fn at_origin() -> Self {
        MovableHand(Arc::new(Mutex::new(Vec3::ZERO)))
    }

    pub fn move_to(&self, position: Vec3) {
        *self.0.lock() = position;
    }
}

impl Tracking for MovableHand {
    fn is_in_vr(&self) -> bool {
        true
    }

    fn hand_position(&self) -> Vec3 {
        *self.0.lock()
    }

    fn head_pose(&self) -> (Vec3, Vec3) {
        (Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0))
    }
}

#[derive(Default)]
pub struct SunRecord {
    pub directional: bool,
    pub pitch: f32,
    pub intensity: f32,
    pub color: Option<Rgb>,
}

#[derive(Clone, Default)]
pub struct RecordingSun(pub Arc<Mutex<SunRecord>>);

impl SunLamp for RecordingSun {
    fn set_directional(&mut self) {
        self.0.lock().directional = true;
    }

    fn set_pitch(&mut self, degrees: f32) {
        self.0.lock().pitch = degrees;
    }

    fn set_intensity(&mut self, intensity: f32) {
        self.0.lock().intensity = intensity;
    }

    fn set_color(&mut self, color: Rgb) {
        self.0.lock().color = Some(color);
    }
}

#[derive(Default)]
pub struct SliderRecord {
    pub value: f32,
    pub interactable: bool,
    pub display_writes: u32,
}

#[derive(Clone, Default)]
pub struct RecordingSlider(pub Arc<Mutex<SliderRecord>>);

impl RecordingSlider {
    pub fn set_user_value(&self, value: f32) {
        self.0.lock().value = value;
    }
}

impl TimeSlider for RecordingSlider {
    fn value(&self) -> f32 {
        self.0.lock().value
    }

    fn set_value(&mut self, value: f32) {
        let mut record = self.0.lock();
        record.value = value;
        record.display_writes += 1;
    }

    fn set_interactable(&mut self, interactable: bool) {
        self.0.lock().interactable = interactable;
    }
}

#[derive(Default)]
pub struct AudioRecord {
    pub playing: bool,
    pub plays: u32,
    pub stops: u32,
}

#[derive(Clone, Default)]
pub struct RecordingAudio(pub Arc<Mutex<AudioRecord>>);

impl FeedbackAudio for RecordingAudio {
    fn play(&mut self) {
        let mut record = self.0.lock();
        record.playing = true;
        record.plays += 1;
    }

    fn stop(&mut self) {
        let mut record = self.0.lock();
        record.playing = false;
        record.stops += 1;
    }
}

#[derive(Clone)]
pub struct RecordingToggle(pub Arc<Mutex<bool>>);

impl RecordingToggle {
    pub fn active(initial: bool) -> Self {
        RecordingToggle(Arc::new(Mutex::new(initial)))
    }
}

impl ToggleTarget for RecordingToggle {
    fn is_active(&self) -> bool {
        *self.0.lock()
    }

    fn set_active(&mut self, active: bool) {
        *self.0.lock() = active;
    }
}

#[derive(Clone, Default)]
pub struct RecordingHandle(pub Arc<Mutex<f32>>);

impl LeverHandle for RecordingHandle {
    fn set_yaw(&mut self, degrees: f32) {
        *self.0.lock() = degrees;
    }
}
