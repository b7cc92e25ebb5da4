//! Sundial Sync - Single-writer replication layer
//!
//! This crate implements the replication model consumed by the cycle
//! behaviors:
//! - Snapshot wire codec (the replicated unit: object id + elapsed time)
//! - Per-object ownership records
//! - The `Replication` trait, the seam to the host's networking substrate
//! - `LocalBus`, an in-memory implementation with frame-quantized delivery
//!   latency, loss injection, and delayed ownership grants, used by tests
//!   and the simulator
//!
//! Exactly one participant owns an object at a time; only the owner's
//! snapshots are accepted. Observers overwrite their local state wholesale
//! on receipt - last received wins, no reconciliation.

pub mod authority;
pub mod bus;
pub mod replication;
pub mod snapshot;

pub use authority::*;
pub use bus::*;
pub use replication::*;
pub use snapshot::*;
