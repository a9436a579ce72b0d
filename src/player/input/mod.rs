//! Control input routing.
//!
//! Turns user intents into sync-engine operations and enforces the
//! intent-level rules: scrub release always resumes playback, restart
//! always rewinds and plays, and only the four fixed rates get through.
//! Keyboard and mouse events are mapped to intents in their own modules.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::Event;
use tracing::warn;

use crate::error::ControlError;
use crate::player::render::{HitMap, PresentationSink};
use crate::player::state::{InputResult, Rate};
use crate::player::sync::SyncEngine;
use crate::timeline::Timeline;

/// A discrete user intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    ScrubStart,
    ScrubMove(f64),
    ScrubEnd(f64),
    TogglePlay,
    /// Raw multiplier; anything outside the allowed set is rejected
    SelectRate(f64),
    Restart,
    OpenRatePicker,
    CloseRatePicker,
    /// Choose the picker entry at this index
    PickRateOption(usize),
}

/// The four rate options, fixed at construction, and whether they are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatePicker {
    options: [Rate; 4],
    open: bool,
}

impl RatePicker {
    pub fn new() -> Self {
        Self {
            options: Rate::ALL,
            open: false,
        }
    }

    pub fn options(&self) -> &[Rate; 4] {
        &self.options
    }

    pub fn option(&self, index: usize) -> Option<Rate> {
        self.options.get(index).copied()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

impl Default for RatePicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps intents onto the sync engine.
#[derive(Debug, Clone, Default)]
pub struct ControlRouter {
    picker: RatePicker,
}

impl ControlRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn picker(&self) -> &RatePicker {
        &self.picker
    }

    /// Apply an intent.
    ///
    /// Rejected intents leave every piece of state untouched.
    pub fn dispatch<T: Timeline, S: PresentationSink>(
        &mut self,
        engine: &mut SyncEngine<T, S>,
        intent: Intent,
    ) -> Result<(), ControlError> {
        let result = self.apply(engine, intent);
        if let Err(err) = &result {
            warn!(?intent, %err, "intent rejected");
        }
        result
    }

    fn apply<T: Timeline, S: PresentationSink>(
        &mut self,
        engine: &mut SyncEngine<T, S>,
        intent: Intent,
    ) -> Result<(), ControlError> {
        match intent {
            Intent::ScrubStart => engine.begin_scrub(),
            Intent::ScrubMove(progress) => engine.scrub_to(progress),
            Intent::ScrubEnd(progress) => engine.end_scrub(progress),
            Intent::TogglePlay => engine.toggle_play(),
            Intent::SelectRate(value) => {
                let rate = Rate::from_value(value).ok_or(ControlError::UnsupportedRate(value))?;
                engine.set_rate(rate);
                self.picker.close();
            }
            Intent::Restart => engine.restart(),
            Intent::OpenRatePicker => self.picker.open(),
            Intent::CloseRatePicker => self.picker.close(),
            Intent::PickRateOption(index) => {
                let rate = self
                    .picker
                    .option(index)
                    .ok_or(ControlError::UnknownRateOption(index))?;
                engine.set_rate(rate);
                self.picker.close();
            }
        }
        Ok(())
    }
}

/// Handle any terminal event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `router` - Router holding the picker state
/// * `engine` - Sync engine to drive
/// * `hits` - Control geometry from the last render
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event<T: Timeline, S: PresentationSink>(
    event: Event,
    router: &mut ControlRouter,
    engine: &mut SyncEngine<T, S>,
    hits: &HitMap,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, router, engine),
        Event::Mouse(mouse) => handle_mouse_event(mouse, router, engine, hits),
        _ => InputResult::Continue, // Resize is picked up by the next draw
    }
}
