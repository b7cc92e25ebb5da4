//! Error types for sundial

use thiserror::Error;

use crate::{ObjectId, ParticipantId};

/// Core sundial errors
#[derive(Error, Debug)]
pub enum SundialError {
    // Wire errors
    #[error("Buffer too short: expected {expected}, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },

    #[error("Unknown message kind: {0}")]
    UnknownMessageKind(u8),

    // Authority errors
    #[error("Not owner: participant {participant} cannot write object {object}")]
    NotOwner {
        participant: ParticipantId,
        object: ObjectId,
    },

    // Lookup errors
    #[error("Unknown object: {0:?}")]
    UnknownObject(ObjectId),

    #[error("Unknown participant: {0:?}")]
    UnknownParticipant(ParticipantId),
}

/// Result type for sundial operations
pub type SundialResult<T> = Result<T, SundialError>;
