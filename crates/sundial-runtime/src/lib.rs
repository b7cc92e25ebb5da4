//! Sundial Runtime - Interactive cycle behaviors
//!
//! This crate wires the deterministic core from `sundial-cycle` to its
//! external collaborators: the replication substrate, input tracking, the
//! sun light, and the optional widgets. Two behaviors exist, one per
//! script variant:
//! - `LeverCycle`: time advance governed by a grabbable lever
//! - `SliderCycle`: time advance free-running or pinned to a UI slider
//!
//! Both run once per rendered frame on the host's update pass. Nothing
//! here blocks, spawns, or suspends.

pub mod lever_cycle;
pub mod scene;
pub mod slider_cycle;

#[cfg(test)]
mod testutil;

pub use lever_cycle::*;
pub use scene::*;
pub use slider_cycle::*;
