//! Sundial Test Harness - Scene fakes and multi-participant simulation
//!
//! This crate provides:
//! - Recording fakes for every scene-facing trait
//! - `SceneSimulator`: N participants running the same behavior variant
//!   against one `LocalBus`, stepped frame by frame with fixed or
//!   jittered deltas
//!
//! Integration tests under `tests/` drive whole interaction sessions;
//! benchmarks under `benches/` cover the per-frame hot paths.

pub mod scene;
pub mod simulator;

pub use scene::*;
pub use simulator::*;
