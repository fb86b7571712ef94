use std::sync::atomic::{AtomicUsize, Ordering};

use super::Severity;

/// Minimum level a message needs to be emitted.
///
/// Only ever holds a valid `Severity` rank, so reads never fall outside the
/// level table.
pub struct Threshold(AtomicUsize);

impl Threshold {
    pub const fn new(level: Severity) -> Self {
        Threshold(AtomicUsize::new(level as usize))
    }

    pub fn get(&self) -> Severity {
        Severity::from_usize(self.0.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn set(&self, level: Severity) {
        self.0.store(level.as_usize(), Ordering::SeqCst);
    }

    #[inline]
    pub fn should_emit(&self, level: Severity) -> bool {
        level.as_usize() >= self.0.load(Ordering::Relaxed)
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::new(Severity::Info)
    }
}

impl std::fmt::Debug for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Threshold").field(&self.get()).finish()
    }
}
