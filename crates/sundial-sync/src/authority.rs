//! Ownership records - who may write a replicated object
//!
//! The cycle model is strictly single-writer: each object has exactly one
//! owner at any instant, and ownership moves wholesale on transfer. There
//! is no delegation and no shared authority.

use sundial_core::{ObjectId, ParticipantId, SundialError, SundialResult};

/// Ownership record for one replicated object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Authority {
    owner: ParticipantId,
}

impl Authority {
    pub fn new(owner: ParticipantId) -> Self {
        Authority { owner }
    }

    #[inline]
    pub fn owner(&self) -> ParticipantId {
        self.owner
    }

    #[inline]
    pub fn is_owner(&self, participant: ParticipantId) -> bool {
        self.owner == participant
    }

    /// Reassign ownership. The previous owner loses write access in the
    /// same instant.
    pub fn transfer(&mut self, to: ParticipantId) {
        self.owner = to;
    }

    /// Check a write attempt, returning the authority error the caller
    /// propagates when a non-owner tries to mutate.
    pub fn check_writer(
        &self,
        participant: ParticipantId,
        object: ObjectId,
    ) -> SundialResult<()> {
        if self.is_owner(participant) {
            Ok(())
        } else {
            Err(SundialError::NotOwner {
                participant,
                object,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_owner() {
        let alice = ParticipantId::new(1);
        let bob = ParticipantId::new(2);

        let mut auth = Authority::new(alice);
        assert!(auth.is_owner(alice));
        assert!(!auth.is_owner(bob));

        auth.transfer(bob);
        assert!(!auth.is_owner(alice));
        assert!(auth.is_owner(bob));
    }

    #[test]
    fn test_check_writer() {
        let alice = ParticipantId::new(1);
        let bob = ParticipantId::new(2);
        let object = ObjectId::new(10);

        let auth = Authority::new(alice);
        assert!(auth.check_writer(alice, object).is_ok());

        let err = auth.check_writer(bob, object).unwrap_err();
        match err {
            SundialError::NotOwner {
                participant,
                object: obj,
            } => {
                assert_eq!(participant, bob);
                assert_eq!(obj, object);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
