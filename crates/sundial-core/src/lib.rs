//! Sundial Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout sundial:
//! - Identifiers (ParticipantId, ObjectId)
//! - Cycle-time primitives (CycleLength, TimeOfDay)
//! - Geometry and color primitives (Vec3, Rgb)
//! - Configuration surface and error taxonomy

pub mod config;
pub mod error;
pub mod geom;
pub mod id;
pub mod time;

pub use config::*;
pub use error::*;
pub use geom::*;
pub use id::*;
pub use time::*;
