//! Player state management
//!
//! Contains the canonical `PlaybackState` owned by the sync engine, the
//! fixed set of playback rates, and the read-only `Snapshot` handed out to
//! everything else.

use std::fmt;

use serde::Serialize;

use crate::timeline::clamp_progress;

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Tear the controls down
    Quit,
}

/// Playback speed multiplier. Only these four values are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rate {
    Tenth,
    Half,
    #[default]
    Normal,
    Double,
}

impl Rate {
    /// All rates in picker order.
    pub const ALL: [Rate; 4] = [Rate::Tenth, Rate::Half, Rate::Normal, Rate::Double];

    pub fn value(self) -> f64 {
        match self {
            Rate::Tenth => 0.1,
            Rate::Half => 0.5,
            Rate::Normal => 1.0,
            Rate::Double => 2.0,
        }
    }

    /// Label shown on the speed control.
    pub fn label(self) -> &'static str {
        match self {
            Rate::Tenth => "0.1x",
            Rate::Half => "0.5x",
            Rate::Normal => "1x",
            Rate::Double => "2x",
        }
    }

    /// Match a raw multiplier against the allowed set.
    pub fn from_value(value: f64) -> Option<Rate> {
        Self::ALL
            .into_iter()
            .find(|rate| (rate.value() - value).abs() < 1e-9)
    }

    /// Closest allowed rate to a raw multiplier. Ties go to the slower rate;
    /// NaN maps to 1x.
    pub fn nearest(value: f64) -> Rate {
        if value.is_nan() {
            return Rate::Normal;
        }
        let mut best = Rate::Tenth;
        for rate in Self::ALL {
            if (rate.value() - value).abs() < (best.value() - value).abs() {
                best = rate;
            }
        }
        best
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical playback state.
///
/// Exactly one owner (the sync engine) mutates this. Everyone else sees
/// [`Snapshot`] copies.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Normalized position, always within `[0, 1]`
    pub progress: f64,
    /// True iff the timeline is advancing; always false once `progress` hits 1
    pub playing: bool,
    pub rate: Rate,
    /// User is dragging the scrub control; timeline updates are held back
    pub scrubbing: bool,
    /// Most recent progress read from the timeline, kept while scrubbing
    pub last_timeline_progress: f64,
}

impl PlaybackState {
    /// Seed state from what the timeline reports at construction.
    pub fn seeded(progress: f64, paused: bool, rate: Rate) -> Self {
        let progress = clamp_progress(progress);
        Self {
            progress,
            playing: !paused && progress < 1.0,
            rate,
            scrubbing: false,
            last_timeline_progress: progress,
        }
    }

    /// The timeline reached its end.
    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            progress: self.progress,
            playing: self.playing,
            rate: self.rate.value(),
            scrubbing: self.scrubbing,
        }
    }
}

/// Read-only copy of the playback state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub progress: f64,
    pub playing: bool,
    pub rate: f64,
    pub scrubbing: bool,
}
