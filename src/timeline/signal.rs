//! Pending-update counter shared between a timeline and the sync engine.

use std::cell::Cell;
use std::rc::Rc;

use super::ProgressListener;

/// Counts timeline notifications until the engine drains them.
///
/// The listener handed to the timeline only holds a weak reference, so a
/// timeline that outlives the engine keeps no state alive and its stale
/// listener becomes a no-op.
#[derive(Debug, Clone, Default)]
pub struct ProgressSignal {
    pending: Rc<Cell<u32>>,
}

impl ProgressSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the listener to register with [`super::Timeline::on_progress`].
    pub fn listener(&self) -> ProgressListener {
        let pending = Rc::downgrade(&self.pending);
        Box::new(move || {
            if let Some(pending) = pending.upgrade() {
                pending.set(pending.get().saturating_add(1));
            }
        })
    }

    /// Number of notifications received since the last [`take`](Self::take).
    pub fn pending(&self) -> u32 {
        self.pending.get()
    }

    /// Drain the counter, returning how many notifications arrived.
    pub fn take(&self) -> u32 {
        self.pending.replace(0)
    }
}
