//! Time lock - free-run vs slider-pinned toggle

/// Two-state toggle deciding which rule governs time advance.
///
/// While locked, elapsed time tracks the slider value instead of
/// free-running. Toggling never resets elapsed time; it only switches
/// which rule applies to subsequent frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLock {
    locked: bool,
}

impl TimeLock {
    pub fn new() -> Self {
        TimeLock::default()
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Flip the lock, returning the new state. One interact event maps to
    /// exactly one flip.
    pub fn toggle(&mut self) -> bool {
        self.locked = !self.locked;
        self.locked
    }
}
