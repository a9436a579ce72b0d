//! Timeline adapter seam.
//!
//! The controls never own animation state. They drive whatever engine sits
//! behind the [`Timeline`] trait and listen for its update notifications.
//!
//! - `signal`: the pending-update counter the sync engine registers as its listener
//! - `sim`: an in-process timeline used by the terminal front end and the tests

mod signal;
mod sim;

pub use signal::ProgressSignal;
pub use sim::{CallCounts, SimTimeline};

use crate::error::ControlError;

/// Handle returned by [`Timeline::on_progress`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Callback invoked once per timeline update cycle.
pub type ProgressListener = Box<dyn FnMut()>;

/// Capability interface over an externally-owned animation timeline.
///
/// Implementations must follow these rules:
/// - `seek` clamps out-of-range input and never fails
/// - `play` while playing and `pause` while paused are no-ops
/// - `restart` rewinds to 0 and plays regardless of prior state
/// - `set_rate` leaves progress and paused status untouched
/// - listeners fire once per update cycle and at least once right after
///   `seek`, `play`, `pause` or `restart`
pub trait Timeline {
    /// Normalized position in `[0, 1]`.
    fn progress(&self) -> f64;

    /// Whether the timeline is paused.
    fn is_paused(&self) -> bool;

    /// Move to `progress` without changing the running state.
    fn seek(&mut self, progress: f64);

    fn play(&mut self);

    fn pause(&mut self);

    /// Rewind to the start and begin playing.
    fn restart(&mut self);

    /// Change the speed multiplier.
    fn set_rate(&mut self, rate: f64);

    /// Current speed multiplier.
    fn rate(&self) -> f64;

    /// Register an update listener.
    fn on_progress(&mut self, listener: ProgressListener) -> ListenerId;

    /// Unregister a listener. Unknown ids are ignored.
    fn remove_listener(&mut self, id: ListenerId);

    /// Construction-time check that the timeline can be driven.
    ///
    /// Steady-state operations are infallible, so anything that could go
    /// wrong with the underlying engine has to be reported here.
    fn validate(&self) -> Result<(), ControlError> {
        Ok(())
    }
}

/// Clamp a progress value into `[0, 1]`. NaN maps to 0.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}
