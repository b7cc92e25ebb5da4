//! Snapshot - the replicated unit of cycle state
//!
//! Wire layout, little-endian, 12 bytes:
//!
//! ```text
//! [object id: u64][elapsed secs: f32]
//! ```
//!
//! A snapshot carries the owner's full authoritative state; receivers
//! apply it wholesale. There is no sequence number or merge metadata -
//! the single-writer model needs none.

use bytes::{Buf, BufMut};
use sundial_core::{ObjectId, SundialError, SundialResult};

/// Encoded size of one snapshot.
pub const SNAPSHOT_SIZE: usize = 12;

/// Replicated cycle state for one scene object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    /// Object this snapshot belongs to.
    pub object: ObjectId,
    /// Seconds into the current cycle, as written by the owner.
    pub elapsed: f32,
}

impl Snapshot {
    #[inline]
    pub fn new(object: ObjectId, elapsed: f32) -> Self {
        Snapshot { object, elapsed }
    }

    /// Encode into a wire buffer.
    pub fn encode(&self, buf: &mut impl BufMut) {
        buf.put_u64_le(self.object.0);
        buf.put_f32_le(self.elapsed);
    }

    /// Encode into a fresh byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(SNAPSHOT_SIZE);
        self.encode(&mut buf);
        buf
    }

    /// Decode from a wire buffer. Never panics on short input.
    pub fn decode(mut buf: &[u8]) -> SundialResult<Self> {
        if buf.len() < SNAPSHOT_SIZE {
            return Err(SundialError::BufferTooShort {
                expected: SNAPSHOT_SIZE,
                actual: buf.len(),
            });
        }

        let object = ObjectId::new(buf.get_u64_le());
        let elapsed = buf.get_f32_le();

        Ok(Snapshot { object, elapsed })
    }
}
