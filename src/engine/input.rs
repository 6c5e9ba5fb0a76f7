use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One-bit "input happened" signal.
///
/// Clones share the flag, so an input thread can hold one while the writer
/// polls another. Never locks.
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    flag: Arc<AtomicBool>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn clear(&self) {
        self.flag.store(false, Ordering::Release);
    }

    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Clear the flag, returning whether it was set.
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::AcqRel)
    }
}
