//! In-process simulated timeline.
//!
//! Advances on wall-clock deltas fed by the host loop. Behaves like a
//! non-looping animation timeline: it stops advancing at the end but keeps
//! reporting "not paused", which is exactly the case the sync engine has to
//! treat as finished.

use tracing::{trace, warn};

use super::{clamp_progress, ListenerId, ProgressListener, Timeline};
use crate::error::ControlError;

/// Effective adapter calls, for checking idempotence.
///
/// No-op calls (`play` while playing, `pause` while paused) are not counted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallCounts {
    pub play: usize,
    pub pause: usize,
    pub seek: usize,
    pub restart: usize,
    /// Arguments of every `set_rate` call, in order
    pub set_rate: Vec<f64>,
}

/// A timeline with a fixed duration in seconds.
pub struct SimTimeline {
    duration: f64,
    time: f64,
    paused: bool,
    rate: f64,
    listeners: Vec<(ListenerId, ProgressListener)>,
    next_listener: u64,
    calls: CallCounts,
}

impl SimTimeline {
    /// Create a playing timeline positioned at the start.
    pub fn new(duration_secs: f64) -> Self {
        Self {
            duration: duration_secs,
            time: 0.0,
            paused: false,
            rate: 1.0,
            listeners: Vec::new(),
            next_listener: 0,
            calls: CallCounts::default(),
        }
    }

    /// Start paused instead of playing.
    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// Start at the given progress.
    pub fn at(mut self, progress: f64) -> Self {
        self.time = clamp_progress(progress) * self.duration;
        self
    }

    /// Start with the given speed multiplier.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// True while playing and not yet at the end.
    pub fn is_active(&self) -> bool {
        !self.paused && self.time < self.duration
    }

    pub fn calls(&self) -> &CallCounts {
        &self.calls
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Advance by `dt` wall-clock seconds, scaled by the rate.
    ///
    /// Notifies listeners once when the timeline moved. Paused or finished
    /// timelines do not tick.
    pub fn advance(&mut self, dt: f64) {
        if !self.is_active() || dt.is_nan() || dt <= 0.0 {
            return;
        }
        self.time = (self.time + dt * self.rate).min(self.duration);
        trace!(time = self.time, "timeline advanced");
        self.notify();
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
    }
}

impl Timeline for SimTimeline {
    fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            clamp_progress(self.time / self.duration)
        } else {
            1.0
        }
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn seek(&mut self, progress: f64) {
        self.time = clamp_progress(progress) * self.duration;
        self.calls.seek += 1;
        self.notify();
    }

    fn play(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.calls.play += 1;
        self.notify();
    }

    fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        self.calls.pause += 1;
        self.notify();
    }

    fn restart(&mut self) {
        self.time = 0.0;
        self.paused = false;
        self.calls.restart += 1;
        self.notify();
    }

    fn set_rate(&mut self, rate: f64) {
        if !(rate.is_finite() && rate > 0.0) {
            warn!(rate, "ignoring non-positive timeline rate");
            return;
        }
        self.rate = rate;
        self.calls.set_rate.push(rate);
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn on_progress(&mut self, listener: ProgressListener) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, listener));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|(existing, _)| *existing != id);
    }

    fn validate(&self) -> Result<(), ControlError> {
        if self.duration.is_finite() && self.duration > 0.0 {
            Ok(())
        } else {
            Err(ControlError::InvalidTimeline(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration
            )))
        }
    }
}
