//! Slider-lock cycle behavior (variant 2)
//!
//! Time either free-runs at real-time rate or is pinned to the slider's
//! normalized value; a single interact event flips between the two.
//! Entering the locked state enables the slider for user input, leaving it
//! disables it again. This variant never requests ownership - whoever owns
//! the object keeps writing.

use std::time::Duration;

use sundial_core::{CycleConfig, ObjectId, ParticipantId, TimeOfDay};
use sundial_cycle::{sun_state, CycleClock, TimeLock};
use sundial_sync::{Replication, Snapshot};

use crate::scene::{SunLamp, TimeSlider};

/// The slider-lock day/night behavior for one scene object.
pub struct SliderCycle<R: Replication> {
    participant: ParticipantId,
    object: ObjectId,
    config: CycleConfig,
    replication: R,
    clock: CycleClock,
    lock: TimeLock,
    sun: Option<Box<dyn SunLamp>>,
    slider: Option<Box<dyn TimeSlider>>,
}

impl<R: Replication> SliderCycle<R> {
    pub fn new(
        participant: ParticipantId,
        object: ObjectId,
        config: CycleConfig,
        replication: R,
    ) -> Self {
        SliderCycle {
            participant,
            object,
            clock: CycleClock::new(config.cycle_length),
            lock: TimeLock::new(),
            config,
            replication,
            sun: None,
            slider: None,
        }
    }

    pub fn with_sun(mut self, mut sun: Box<dyn SunLamp>) -> Self {
        sun.set_directional();
        self.sun = Some(sun);
        self
    }

    pub fn with_slider(mut self, slider: Box<dyn TimeSlider>) -> Self {
        self.slider = Some(slider);
        self
    }

    /// Handle a discrete interact event: flip the lock and the slider's
    /// input enable with it.
    pub fn interact(&mut self) {
        let locked = self.lock.toggle();
        tracing::debug!(locked, "time lock toggled");

        if let Some(slider) = &mut self.slider {
            slider.set_interactable(locked);
        }
    }

    /// Per-frame update, driven by the host's render loop.
    ///
    /// While locked with no slider configured, elapsed time simply holds -
    /// there is nothing to track.
    pub fn update(&mut self, dt: Duration) {
        if self.replication.is_owner(self.participant, self.object) {
            if self.lock.is_locked() {
                if let Some(slider) = &self.slider {
                    self.clock.set_normalized(slider.value());
                }
            } else {
                self.clock.advance_auto(dt.as_secs_f32());
            }
            self.replication.broadcast(
                self.participant,
                Snapshot::new(self.object, self.clock.elapsed()),
            );
        }

        self.apply_render();
    }

    /// Accept a replicated snapshot; observers overwrite wholesale.
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

        // While locked the slider is the input; writing the display value
        // back every frame would fight the user's drag.
        if !self.lock.is_locked() {
            if let Some(slider) = &mut self.slider {
                slider.set_value(self.clock.time_of_day().as_fraction());
            }
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
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::*;

    fn rig(owner: bool) -> (SliderCycle<StubReplication>, StubReplication, RecordingSlider) {
        let replication = if owner {
            StubReplication::owning()
        } else {
            StubReplication::default()
        };
        let slider = RecordingSlider::default();
        let cycle = SliderCycle::new(
            ParticipantId::new(1),
            ObjectId::new(7),
            CycleConfig::default(),
            replication.clone(),
        )
        .with_slider(Box::new(slider.clone()));
        (cycle, replication, slider)
    }

    #[test]
    fn test_lock_toggle_flips_slider_input() {
        let (mut cycle, _replication, slider) = rig(true);

        cycle.interact();
        assert!(cycle.is_locked());
        assert!(slider.0.lock().interactable);

        cycle.interact();
        assert!(!cycle.is_locked());
        assert!(!slider.0.lock().interactable);
    }

    #[test]
    fn test_locked_tracks_slider_exactly() {
        let (mut cycle, _replication, slider) = rig(true);

        // Free-run first so the pin visibly replaces the prior value
        cycle.update(Duration::from_secs(33));
        assert_eq!(cycle.elapsed(), 33.0);

        cycle.interact();
        slider.set_user_value(0.5);
        cycle.update(Duration::from_secs(1));
        assert_eq!(cycle.elapsed(), 60.0);
    }

    #[test]
    fn test_unlock_resumes_freerun_from_pinned_value() {
        let (mut cycle, _replication, slider) = rig(true);

        cycle.interact();
        slider.set_user_value(0.25);
        cycle.update(Duration::from_secs(1));
        assert_eq!(cycle.elapsed(), 30.0);

        cycle.interact();
        cycle.update(Duration::from_secs(1));
        assert_eq!(cycle.elapsed(), 31.0);
    }

    #[test]
    fn test_locked_frames_skip_display_write() {
        let (mut cycle, _replication, slider) = rig(true);

        cycle.update(Duration::from_secs(1));
        assert_eq!(slider.0.lock().display_writes, 1);

        cycle.interact();
        cycle.update(Duration::from_secs(1));
        assert_eq!(slider.0.lock().display_writes, 1);

        cycle.interact();
        cycle.update(Duration::from_secs(1));
        assert_eq!(slider.0.lock().display_writes, 2);
    }

    #[test]
    fn test_owner_broadcasts_each_frame() {
        let (mut cycle, replication, _slider) = rig(true);

        cycle.update(Duration::from_secs(2));
        cycle.update(Duration::from_secs(3));

        let broadcasts = &replication.0.lock().broadcasts;
        assert_eq!(broadcasts.len(), 2);
        assert_eq!(broadcasts[1].elapsed, 5.0);
    }

    #[test]
    fn test_never_requests_ownership() {
        let (mut cycle, replication, _slider) = rig(false);

        cycle.interact();
        cycle.update(Duration::from_secs(1));
        cycle.interact();
        cycle.update(Duration::from_secs(1));

        assert!(replication.0.lock().requests.is_empty());
        assert!(replication.0.lock().broadcasts.is_empty());
    }

    #[test]
    fn test_non_owner_syncs_from_snapshot() {
        let (mut cycle, _replication, _slider) = rig(false);

        cycle.update(Duration::from_secs(1));
        assert_eq!(cycle.elapsed(), 0.0);

        cycle.on_snapshot(Snapshot::new(ObjectId::new(7), 90.0));
        assert_eq!(cycle.elapsed(), 90.0);
        assert!((cycle.time_of_day().as_fraction() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_locked_without_slider_holds_time() {
        let replication = StubReplication::owning();
        let mut cycle = SliderCycle::new(
            ParticipantId::new(1),
            ObjectId::new(7),
            CycleConfig::default(),
            replication,
        );

        cycle.update(Duration::from_secs(10));
        assert_eq!(cycle.elapsed(), 10.0);

        cycle.interact();
        cycle.update(Duration::from_secs(10));
        assert_eq!(cycle.elapsed(), 10.0);
    }
}
