//! Sundial Cycle - The time-and-lighting state machine
//!
//! This crate implements the deterministic core of the day/night cycle:
//! - `CycleClock`: elapsed-time accumulator, always wrapped into one cycle
//! - `Lever`: clamped lever-angle accumulator and grip state machine
//! - `TimeLock`: free-run vs slider-pinned toggle
//! - `sun_state`: pure mapping from time-of-day to sun pitch, intensity,
//!   and color
//!
//! Nothing in this crate touches the network or the scene graph; behaviors
//! in `sundial-runtime` wire these pieces to their external collaborators.

pub mod clock;
pub mod lever;
pub mod lock;
pub mod sun;

pub use clock::*;
pub use lever::*;
pub use lock::*;
pub use sun::*;
