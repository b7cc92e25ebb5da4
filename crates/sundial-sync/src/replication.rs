//! The replication seam
//!
//! Behaviors consume the host's networking substrate through this trait
//! and never implement it themselves. All three operations are
//! fire-and-forget from the caller's perspective: ownership arrives later
//! (or not at all), and broadcasts reach observers at unspecified,
//! eventually-consistent timing.

use sundial_core::{ObjectId, ParticipantId};

use crate::Snapshot;

/// Single-writer replication service.
pub trait Replication {
    /// Is `participant` the current authoritative writer of `object`?
    fn is_owner(&self, participant: ParticipantId, object: ObjectId) -> bool;

    /// Ask for ownership of `object`. The grant is asynchronous; until
    /// `is_owner` flips, the requester must not write authoritative state.
    fn request_ownership(&mut self, participant: ParticipantId, object: ObjectId);

    /// Publish the owner's current state to all observers.
    fn broadcast(&mut self, from: ParticipantId, snapshot: Snapshot);
}
