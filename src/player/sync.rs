//! Playback state sync engine.
//!
//! Reconciles updates coming from the timeline with updates coming from user
//! input. The `scrubbing` flag decides which side is authoritative:
//!
//! - Idle: every timeline notification is read back and pushed to the sink.
//! - Scrubbing: timeline notifications only refresh the cached timeline
//!   progress; the drag position owns the display until the scrub ends.
//!
//! Timeline notifications are counted by a [`ProgressSignal`] and processed
//! in [`SyncEngine::pump`], so a timeline that notifies synchronously from
//! inside `seek` or `play` never re-enters the engine mid-operation.

use tracing::{debug, trace};

use super::render::PresentationSink;
use super::state::{PlaybackState, Rate, Snapshot};
use crate::timeline::{clamp_progress, ListenerId, ProgressSignal, Timeline};

/// Owner of the canonical [`PlaybackState`].
pub struct SyncEngine<T: Timeline, S: PresentationSink> {
    timeline: T,
    sink: S,
    state: PlaybackState,
    signal: ProgressSignal,
    listener: Option<ListenerId>,
}

impl<T: Timeline, S: PresentationSink> SyncEngine<T, S> {
    /// Seed state from the timeline, subscribe to its updates and push the
    /// initial state to the sink.
    ///
    /// A timeline running at a rate outside the allowed set keeps its speed;
    /// the label shows the nearest allowed rate.
    pub fn new(mut timeline: T, sink: S) -> Self {
        let raw = timeline.rate();
        let rate = Rate::from_value(raw).unwrap_or_else(|| {
            let shown = Rate::nearest(raw);
            debug!(raw, %shown, "timeline rate not selectable, showing nearest");
            shown
        });
        let state = PlaybackState::seeded(timeline.progress(), timeline.is_paused(), rate);
        let signal = ProgressSignal::new();
        let listener = timeline.on_progress(signal.listener());

        let mut engine = Self {
            timeline,
            sink,
            state,
            signal,
            listener: Some(listener),
        };
        debug!(snapshot = ?engine.snapshot(), "sync engine attached");
        engine.push_all();
        engine
    }

    /// Process pending timeline notifications.
    ///
    /// Several notifications queued since the last pump collapse into one
    /// read-back, since each read sees the latest timeline state anyway.
    /// Returns true if anything was pending.
    pub fn pump(&mut self) -> bool {
        let pending = self.signal.take();
        if pending == 0 {
            return false;
        }
        trace!(pending, "processing timeline notifications");
        self.on_timeline_update();
        true
    }

    /// Handle one timeline update notification.
    pub fn on_timeline_update(&mut self) {
        let progress = clamp_progress(self.timeline.progress());
        self.state.last_timeline_progress = progress;

        if self.state.scrubbing {
            trace!(progress, "timeline update held while scrubbing");
            return;
        }

        let was_playing = self.state.playing;
        self.state.progress = progress;
        // A finished timeline is stopped whatever its paused flag says
        self.state.playing = !self.timeline.is_paused() && progress < 1.0;

        if was_playing && self.state.is_finished() {
            debug!("timeline reached the end");
        }
        self.push_position();
        self.push_playing();
    }

    /// Idle -> Scrubbing. The timeline is left alone until the scrub ends.
    pub fn begin_scrub(&mut self) {
        if self.state.scrubbing {
            debug!("scrub already in progress");
            return;
        }
        self.state.scrubbing = true;
        debug!(progress = self.state.progress, "scrub started");
    }

    /// Move the displayed position while scrubbing. No adapter call.
    pub fn scrub_to(&mut self, progress: f64) {
        if !self.state.scrubbing {
            debug!(progress, "scrub move ignored outside a scrub");
            return;
        }
        // Playing is left alone: a drag to the end is not a finish until release
        self.state.progress = clamp_progress(progress);
        self.push_position();
    }

    /// Scrubbing -> Idle: seek to the release point and resume playback.
    pub fn end_scrub(&mut self, progress: f64) {
        if !self.state.scrubbing {
            debug!(progress, "scrub end ignored outside a scrub");
            return;
        }
        let progress = clamp_progress(progress);
        self.timeline.seek(progress);
        self.timeline.play();
        self.state.scrubbing = false;

        self.state.progress = progress;
        self.state.last_timeline_progress = progress;
        self.state.playing = progress < 1.0;
        debug!(progress, "scrub released");
        self.push_all();
    }

    /// Pause when playing, play otherwise.
    ///
    /// Decides from the cached `playing` flag, never the adapter's paused
    /// flag, which can lag a command that was just issued.
    pub fn toggle_play(&mut self) {
        if self.state.playing {
            self.timeline.pause();
        } else {
            self.timeline.play();
        }
        self.state.playing = !self.state.playing && !self.state.is_finished();
        debug!(playing = self.state.playing, "play toggled");
        self.push_playing();
    }

    /// Change the playback rate. Progress and playing are untouched.
    pub fn set_rate(&mut self, rate: Rate) {
        self.timeline.set_rate(rate.value());
        self.state.rate = rate;
        debug!(%rate, "rate selected");
        self.push_all();
    }

    /// Rewind to the start and play. The rate is kept.
    pub fn restart(&mut self) {
        self.timeline.restart();
        self.state.progress = 0.0;
        self.state.last_timeline_progress = 0.0;
        self.state.playing = true;
        debug!("restarted");
        self.sink.play_restart_animation();
        self.push_all();
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn timeline(&self) -> &T {
        &self.timeline
    }

    /// Mutable access for hosts that drive the timeline themselves.
    ///
    /// Changes made here reach the engine through the next [`pump`](Self::pump).
    pub fn timeline_mut(&mut self) -> &mut T {
        &mut self.timeline
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn push_position(&mut self) {
        self.sink.set_scrub_position(self.state.progress);
    }

    fn push_playing(&mut self) {
        self.sink.show_playing(self.state.playing);
    }

    fn push_all(&mut self) {
        self.push_position();
        self.push_playing();
        self.sink.set_speed_label(self.state.rate.label());
    }
}

impl<T: Timeline, S: PresentationSink> Drop for SyncEngine<T, S> {
    fn drop(&mut self) {
        if let Some(id) = self.listener.take() {
            self.timeline.remove_listener(id);
        }
    }
}
