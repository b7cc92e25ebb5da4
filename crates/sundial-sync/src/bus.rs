//! In-memory replication bus
//!
//! `LocalBus` stands in for the host's networking substrate in tests and
//! simulations. Delivery is quantized to frames: a broadcast queued on one
//! frame is delivered to each observer a configurable number of ticks
//! later, optionally dropped by a seeded loss roll. Ownership grants are
//! delayed the same way, so callers exercise the window where a requester
//! is not yet the writer.
//!
//! Snapshots travel encoded; an undecodable payload is dropped with a
//! warning, never surfaced to behaviors.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sundial_core::{ObjectId, ParticipantId};

use crate::{Authority, Replication, Snapshot};

/// Bus behavior knobs.
#[derive(Clone, Debug)]
pub struct BusConfig {
    /// Ticks between broadcast and delivery. Delivery is never
    /// synchronous; zero behaves like one.
    pub delivery_delay_frames: u32,
    /// Ticks between an ownership request and its grant.
    pub grant_delay_frames: u32,
    /// Per-recipient probability of dropping a snapshot.
    pub loss_rate: f64,
    /// Seed for the loss roll, fixed so runs reproduce.
    pub seed: u64,
}

impl Default for BusConfig {
    fn default() -> Self {
        BusConfig {
            delivery_delay_frames: 1,
            grant_delay_frames: 1,
            loss_rate: 0.0,
            seed: 0,
        }
    }
}

impl BusConfig {
    /// Same-machine conditions: next-frame delivery, no loss.
    pub fn lan() -> Self {
        BusConfig::default()
    }

    /// Degraded conditions: several frames of latency, one in five
    /// snapshots lost.
    pub fn lossy() -> Self {
        BusConfig {
            delivery_delay_frames: 5,
            grant_delay_frames: 3,
            loss_rate: 0.2,
            seed: 0,
        }
    }
}

struct InFlight {
    to: ParticipantId,
    payload: Vec<u8>,
    frames_left: u32,
}

struct PendingGrant {
    object: ObjectId,
    to: ParticipantId,
    frames_left: u32,
}

struct BusInner {
    config: BusConfig,
    rng: StdRng,
    participants: Vec<ParticipantId>,
    authority: HashMap<ObjectId, Authority>,
    in_flight: Vec<InFlight>,
    pending_grants: Vec<PendingGrant>,
}

/// Shared in-memory replication bus.
///
/// Cloning yields another handle to the same bus; each simulated
/// participant holds one.
#[derive(Clone)]
pub struct LocalBus {
    inner: Arc<Mutex<BusInner>>,
}

impl LocalBus {
    pub fn new(config: BusConfig) -> Self {
        let seed = config.seed;
        LocalBus {
            inner: Arc::new(Mutex::new(BusInner {
                config,
                rng: StdRng::seed_from_u64(seed),
                participants: Vec::new(),
                authority: HashMap::new(),
                in_flight: Vec::new(),
                pending_grants: Vec::new(),
            })),
        }
    }

    /// Add a participant to the delivery roster.
    pub fn join(&self, participant: ParticipantId) {
        let mut inner = self.inner.lock();
        if !inner.participants.contains(&participant) {
            inner.participants.push(participant);
        }
    }

    /// Register a replicated object with its initial owner.
    pub fn register(&self, object: ObjectId, owner: ParticipantId) {
        self.inner
            .lock()
            .authority
            .insert(object, Authority::new(owner));
    }

    /// Current owner of an object, if registered.
    pub fn owner_of(&self, object: ObjectId) -> Option<ParticipantId> {
        self.inner.lock().authority.get(&object).map(|a| a.owner())
    }

    /// Advance the bus by one frame: mature pending grants, then collect
    /// the snapshots whose latency elapsed, addressed per recipient.
    pub fn tick(&self) -> Vec<(ParticipantId, Snapshot)> {
        let mut inner = self.inner.lock();

        let mut granted = Vec::new();
        inner.pending_grants.retain_mut(|grant| {
            grant.frames_left = grant.frames_left.saturating_sub(1);
            if grant.frames_left == 0 {
                granted.push((grant.object, grant.to));
                false
            } else {
                true
            }
        });
        for (object, to) in granted {
            if let Some(authority) = inner.authority.get_mut(&object) {
                authority.transfer(to);
                tracing::debug!(?object, ?to, "ownership granted");
            }
        }

        let mut delivered = Vec::new();
        inner.in_flight.retain_mut(|entry| {
            entry.frames_left = entry.frames_left.saturating_sub(1);
            if entry.frames_left == 0 {
                match Snapshot::decode(&entry.payload) {
                    Ok(snapshot) => delivered.push((entry.to, snapshot)),
                    Err(e) => tracing::warn!("dropping undecodable snapshot: {}", e),
                }
                false
            } else {
                true
            }
        });

        delivered
    }
}

impl Replication for LocalBus {
    fn is_owner(&self, participant: ParticipantId, object: ObjectId) -> bool {
        self.inner
            .lock()
            .authority
            .get(&object)
            .is_some_and(|a| a.is_owner(participant))
    }

    fn request_ownership(&mut self, participant: ParticipantId, object: ObjectId) {
        let mut inner = self.inner.lock();
        let already_owner = inner.authority.get(&object).map(|a| a.is_owner(participant));
        match already_owner {
            Some(true) => {}
            Some(false) => {
                let frames = inner.config.grant_delay_frames.max(1);
                inner.pending_grants.push(PendingGrant {
                    object,
                    to: participant,
                    frames_left: frames,
                });
            }
            None => tracing::warn!(?object, "ownership requested for unregistered object"),
        }
    }

    fn broadcast(&mut self, from: ParticipantId, snapshot: Snapshot) {
        let mut inner = self.inner.lock();

        let authorized = inner
            .authority
            .get(&snapshot.object)
            .map(|a| a.check_writer(from, snapshot.object));
        match authorized {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                // The substrate ignores non-owner writes
                tracing::warn!("rejected broadcast: {}", e);
                return;
            }
            None => {
                tracing::warn!(object = ?snapshot.object, "broadcast for unregistered object");
                return;
            }
        }

        let payload = snapshot.to_bytes();
        let delay = inner.config.delivery_delay_frames.max(1);
        let loss_rate = inner.config.loss_rate;
        let recipients: Vec<ParticipantId> = inner
            .participants
            .iter()
            .copied()
            .filter(|p| *p != from)
            .collect();

        for to in recipients {
            if loss_rate > 0.0 && inner.rng.gen::<f64>() < loss_rate {
                continue;
            }
            inner.in_flight.push(InFlight {
                to,
                payload: payload.clone(),
                frames_left: delay,
            });
        }
    }
}
