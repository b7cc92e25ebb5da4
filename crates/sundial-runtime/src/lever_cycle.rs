//! Lever-driven cycle behavior (variant 1)
//!
//! The lever is the time control: its deflection sign picks the direction
//! of time, its magnitude the rate. A discrete interact event toggles the
//! grip; while held by the owner, grab motion rotates the lever. Grabbing
//! also requests ownership, so whoever touches the lever becomes the
//! authoritative writer once the substrate grants it.
//!
//! Per-frame order mirrors the update pass of the host:
//! 1. owner drags the lever (when engaged)
//! 2. owner advances time under the lever policy and broadcasts
//! 3. everyone applies the derived sun state and the display slider

use std::time::Duration;

use sundial_core::{CycleConfig, ObjectId, ParticipantId, TimeOfDay};
use sundial_cycle::{sun_state, CycleClock, Lever};
use sundial_sync::{Replication, Snapshot};

use crate::scene::{
    reach_position, FeedbackAudio, LeverHandle, SunLamp, TimeSlider, ToggleTarget, Tracking,
};

/// The lever-driven day/night behavior for one scene object.
pub struct LeverCycle<R: Replication> {
    participant: ParticipantId,
    object: ObjectId,
    config: CycleConfig,
    replication: R,
    clock: CycleClock,
    lever: Lever,
    tracking: Box<dyn Tracking>,
    sun: Option<Box<dyn SunLamp>>,
    slider: Option<Box<dyn TimeSlider>>,
    audio: Option<Box<dyn FeedbackAudio>>,
    handle: Option<Box<dyn LeverHandle>>,
    toggles: Vec<Option<Box<dyn ToggleTarget>>>,
}

impl<R: Replication> LeverCycle<R> {
    pub fn builder(
        participant: ParticipantId,
        object: ObjectId,
        config: CycleConfig,
        replication: R,
        tracking: Box<dyn Tracking>,
    ) -> LeverCycleBuilder<R> {
        LeverCycleBuilder {
            participant,
            object,
            config,
            replication,
            tracking,
            sun: None,
            slider: None,
            audio: None,
            handle: None,
            toggles: Vec::new(),
        }
    }

    /// Handle a discrete interact event: toggle the grip.
    pub fn interact(&mut self) {
        if self.lever.is_engaged() {
            self.release();
        } else {
            self.engage();
        }
    }

    fn engage(&mut self) {
        let at = reach_position(self.tracking.as_ref());
        self.lever.engage(at);
        tracing::debug!(angle = self.lever.angle(), "lever engaged");

        if let Some(audio) = &mut self.audio {
            audio.play();
        }

        // Each target flips independently; repeated grabs alternate each
        // object's visibility on its own parity. Empty slots are skipped.
        for target in self.toggles.iter_mut().flatten() {
            let active = target.is_active();
            target.set_active(!active);
        }

        if !self.replication.is_owner(self.participant, self.object) {
            self.replication.request_ownership(self.participant, self.object);
        }
    }

    fn release(&mut self) {
        self.lever.release();
        tracing::debug!(angle = self.lever.angle(), "lever released");

        if let Some(audio) = &mut self.audio {
            audio.stop();
        }
    }

    /// Per-frame update, driven by the host's render loop.
    pub fn update(&mut self, dt: Duration) {
        let owner = self.replication.is_owner(self.participant, self.object);

        if self.lever.is_engaged() && owner {
            let at = reach_position(self.tracking.as_ref());
            if let Some(angle) = self.lever.drag(at) {
                if let Some(handle) = &mut self.handle {
                    handle.set_yaw(angle);
                }
            }
        }

        if owner {
            self.clock.advance(
                dt.as_secs_f32(),
                self.lever.direction(),
                self.lever.speed(),
            );
            self.replication.broadcast(
                self.participant,
                Snapshot::new(self.object, self.clock.elapsed()),
            );
        }

        self.apply_render();
    }

    /// Accept a replicated snapshot. Observers overwrite their local
    /// elapsed time wholesale; the owner ignores stragglers addressed to
    /// it after a transfer.
    pub fn on_snapshot(&mut self, snapshot: Snapshot) {
        if snapshot.object != self.object {
            return;
        }
        if !self.replication.is_owner(self.participant, self.object) {
            self.clock.sync_to(snapshot.elapsed);
        }
    }

    fn apply_render(&mut self) {
        if let Some(sun) = &mut self.sun {
            let state = sun_state(self.clock.time_of_day(), self.config.sun_intensity);
            sun.set_pitch(state.pitch_deg);
            sun.set_intensity(state.intensity);
            sun.set_color(state.color);
        }

        if let Some(slider) = &mut self.slider {
            slider.set_value(self.clock.time_of_day().as_fraction());
        }
    }

    #[inline]
    pub fn participant(&self) -> ParticipantId {
        self.participant
    }

    #[inline]
    pub fn object(&self) -> ObjectId {
        self.object
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    #[inline]
    pub fn time_of_day(&self) -> TimeOfDay {
        self.clock.time_of_day()
    }

    #[inline]
    pub fn lever_angle(&self) -> f32 {
        self.lever.angle()
    }

    #[inline]
    pub fn is_engaged(&self) -> bool {
        self.lever.is_engaged()
    }
}

/// Collects the optional scene references for a [`LeverCycle`].
pub struct LeverCycleBuilder<R: Replication> {
    participant: ParticipantId,
    object: ObjectId,
    config: CycleConfig,
    replication: R,
    tracking: Box<dyn Tracking>,
    sun: Option<Box<dyn SunLamp>>,
    slider: Option<Box<dyn TimeSlider>>,
    audio: Option<Box<dyn FeedbackAudio>>,
    handle: Option<Box<dyn LeverHandle>>,
    toggles: Vec<Option<Box<dyn ToggleTarget>>>,
}

impl<R: Replication> LeverCycleBuilder<R> {
    pub fn with_sun(mut self, sun: Box<dyn SunLamp>) -> Self {
        self.sun = Some(sun);
        self
    }

    pub fn with_slider(mut self, slider: Box<dyn TimeSlider>) -> Self {
        self.slider = Some(slider);
        self
    }

    pub fn with_audio(mut self, audio: Box<dyn FeedbackAudio>) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn with_lever_handle(mut self, handle: Box<dyn LeverHandle>) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Append one slot to the toggle list. `None` models an unassigned
    /// entry and is skipped at interaction time.
    pub fn with_toggle(mut self, target: Option<Box<dyn ToggleTarget>>) -> Self {
        self.toggles.push(target);
        self
    }

    pub fn build(self) -> LeverCycle<R> {
        let mut sun = self.sun;
        if let Some(sun) = &mut sun {
            sun.set_directional();
        }

        LeverCycle {
            participant: self.participant,
            object: self.object,
            clock: CycleClock::new(self.config.cycle_length),
            lever: Lever::new(self.config.rotation_speed),
            config: self.config,
            replication: self.replication,
            tracking: self.tracking,
            sun,
            slider: self.slider,
            audio: self.audio,
            handle: self.handle,
            toggles: self.toggles,
        }
    }
}
