//! Multi-participant scene simulator
//!
//! Runs N participants, each with its own behavior instance and scene
//! fakes, against one shared `LocalBus`. A step is one rendered frame for
//! everyone: behaviors update in participant order, then the bus ticks and
//! matured snapshots are routed to their recipients.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sundial_core::{CycleConfig, ObjectId, ParticipantId};
use sundial_runtime::{LeverCycle, SliderCycle};
use sundial_sync::{BusConfig, LocalBus};

use crate::scene::{FakeAudio, FakeLeverHandle, FakeSunLamp, FakeTimeSlider, FakeToggle, FakeTracking};

/// Which script variant every participant runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Lever,
    Slider,
}

enum Behavior {
    Lever(LeverCycle<LocalBus>),
    Slider(SliderCycle<LocalBus>),
}

/// One simulated participant and the fakes its behavior writes to.
pub struct SimPlayer {
    pub id: ParticipantId,
    pub sun: FakeSunLamp,
    pub slider: FakeTimeSlider,
    pub audio: FakeAudio,
    pub handle: FakeLeverHandle,
    pub toggle: FakeToggle,
    pub tracking: FakeTracking,
    behavior: Behavior,
}

impl SimPlayer {
    pub fn elapsed(&self) -> f32 {
        match &self.behavior {
            Behavior::Lever(b) => b.elapsed(),
            Behavior::Slider(b) => b.elapsed(),
        }
    }

    pub fn interact(&mut self) {
        match &mut self.behavior {
            Behavior::Lever(b) => b.interact(),
            Behavior::Slider(b) => b.interact(),
        }
    }

    pub fn lever_angle(&self) -> f32 {
        match &self.behavior {
            Behavior::Lever(b) => b.lever_angle(),
            Behavior::Slider(_) => 0.0,
        }
    }
}

/// Scenario builder, one shared object replicated to every participant.
pub struct SimulatorBuilder {
    variant: Variant,
    players: usize,
    bus_config: BusConfig,
    cycle_config: CycleConfig,
    frame_dt: Duration,
    jitter: Option<(u64, Duration)>,
}

impl SimulatorBuilder {
    pub fn new(variant: Variant) -> Self {
        SimulatorBuilder {
            variant,
            players: 2,
            bus_config: BusConfig::default(),
            cycle_config: CycleConfig::default(),
            frame_dt: Duration::from_millis(20),
            jitter: None,
        }
    }

    pub fn with_players(mut self, count: usize) -> Self {
        self.players = count;
        self
    }

    pub fn with_bus(mut self, config: BusConfig) -> Self {
        self.bus_config = config;
        self
    }

    pub fn with_cycle(mut self, config: CycleConfig) -> Self {
        self.cycle_config = config;
        self
    }

    pub fn with_frame_dt(mut self, dt: Duration) -> Self {
        self.frame_dt = dt;
        self
    }

    /// Add up to `max_extra` of seeded random jitter to every frame delta.
    pub fn with_jitter(mut self, seed: u64, max_extra: Duration) -> Self {
        self.jitter = Some((seed, max_extra));
        self
    }

    pub fn build(self) -> SceneSimulator {
        let bus = LocalBus::new(self.bus_config);
        let object = ObjectId::new(1);
        let ids: Vec<ParticipantId> =
            (0..self.players).map(|i| ParticipantId::new(i as u64 + 1)).collect();

        for id in &ids {
            bus.join(*id);
        }
        // The first participant spawns as owner, like the scene's master
        bus.register(object, ids[0]);

        let players = ids
            .iter()
            .map(|&id| {
                let sun = FakeSunLamp::default();
                let slider = FakeTimeSlider::default();
                let audio = FakeAudio::default();
                let handle = FakeLeverHandle::default();
                let toggle = FakeToggle::starting(false);
                let tracking = FakeTracking::default();

                let behavior = match self.variant {
                    Variant::Lever => Behavior::Lever(
                        LeverCycle::builder(
                            id,
                            object,
                            self.cycle_config.clone(),
                            bus.clone(),
                            Box::new(tracking.clone()),
                        )
                        .with_sun(Box::new(sun.clone()))
                        .with_slider(Box::new(slider.clone()))
                        .with_audio(Box::new(audio.clone()))
                        .with_lever_handle(Box::new(handle.clone()))
                        .with_toggle(Some(Box::new(toggle.clone())))
                        .build(),
                    ),
                    Variant::Slider => Behavior::Slider(
                        SliderCycle::new(id, object, self.cycle_config.clone(), bus.clone())
                            .with_sun(Box::new(sun.clone()))
                            .with_slider(Box::new(slider.clone())),
                    ),
                };

                SimPlayer {
                    id,
                    sun,
                    slider,
                    audio,
                    handle,
                    toggle,
                    tracking,
                    behavior,
                }
            })
            .collect();

        SceneSimulator {
            bus,
            object,
            players,
            frame_dt: self.frame_dt,
            jitter: self.jitter.map(|(seed, max)| (StdRng::seed_from_u64(seed), max)),
        }
    }
}

/// N participants sharing one replicated cycle object.
pub struct SceneSimulator {
    bus: LocalBus,
    object: ObjectId,
    players: Vec<SimPlayer>,
    frame_dt: Duration,
    jitter: Option<(StdRng, Duration)>,
}

impl SceneSimulator {
    pub fn lever() -> SimulatorBuilder {
        SimulatorBuilder::new(Variant::Lever)
    }

    pub fn slider() -> SimulatorBuilder {
        SimulatorBuilder::new(Variant::Slider)
    }

    /// Run one frame for every participant, then deliver matured
    /// snapshots.
    pub fn step(&mut self) {
        let dt = match &mut self.jitter {
            Some((rng, max)) => {
                let extra = rng.gen_range(0..=max.as_micros() as u64);
                self.frame_dt + Duration::from_micros(extra)
            }
            None => self.frame_dt,
        };

        for player in &mut self.players {
            match &mut player.behavior {
                Behavior::Lever(b) => b.update(dt),
                Behavior::Slider(b) => b.update(dt),
            }
        }

        for (to, snapshot) in self.bus.tick() {
            if let Some(player) = self.players.iter_mut().find(|p| p.id == to) {
                match &mut player.behavior {
                    Behavior::Lever(b) => b.on_snapshot(snapshot),
                    Behavior::Slider(b) => b.on_snapshot(snapshot),
                }
            }
        }
    }

    pub fn step_n(&mut self, frames: usize) {
        for _ in 0..frames {
            self.step();
        }
    }

    pub fn player(&self, index: usize) -> &SimPlayer {
        &self.players[index]
    }

    pub fn player_mut(&mut self, index: usize) -> &mut SimPlayer {
        &mut self.players[index]
    }

    pub fn owner(&self) -> Option<ParticipantId> {
        self.bus.owner_of(self.object)
    }

    pub fn frame_dt(&self) -> Duration {
        self.frame_dt
    }
}
