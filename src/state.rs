//! Flags shared between the hotkey listener and the click worker.

use std::sync::atomic::{AtomicBool, Ordering};

/// Runtime state: whether clicking is active and whether the process is exiting.
///
/// `exiting` only ever goes from `false` to `true`.
#[derive(Debug, Default)]
pub struct ClickerState {
    running: AtomicBool,
    exiting: AtomicBool,
}

impl ClickerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting.load(Ordering::Acquire)
    }

    /// Flip `running` and return the new value.
    pub fn toggle(&self) -> bool {
        !self.running.fetch_xor(true, Ordering::AcqRel)
    }

    /// Set `exiting`. Returns `true` only for the call that changed it.
    pub fn request_exit(&self) -> bool {
        !self.exiting.swap(true, Ordering::AcqRel)
    }
}
