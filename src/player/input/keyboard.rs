//! Keyboard input handling for the controls.
//!
//! Handles all keyboard shortcuts: play/pause, restart, rate selection,
//! the rate picker, nudging the position and quitting.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{ControlRouter, Intent};
use crate::player::render::PresentationSink;
use crate::player::state::InputResult;
use crate::player::sync::SyncEngine;
use crate::timeline::Timeline;

/// Fraction of the timeline moved by the arrow keys.
pub const NUDGE_STEP: f64 = 0.05;

/// Handle a keyboard event.
///
/// This is the main keyboard input handler that maps keys to intents and
/// returns control flow signals.
pub fn handle_key_event<T: Timeline, S: PresentationSink>(
    key: KeyEvent,
    router: &mut ControlRouter,
    engine: &mut SyncEngine<T, S>,
) -> InputResult {
    // Ignore key release reports on terminals that send them. Repeats act
    // like presses so a held arrow keeps nudging.
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Esc => {
            if router.picker().is_open() {
                let _ = router.dispatch(engine, Intent::CloseRatePicker);
                InputResult::Continue
            } else {
                InputResult::Quit
            }
        }

        // === Playback controls ===
        KeyCode::Char(' ') | KeyCode::Char('k') => {
            let _ = router.dispatch(engine, Intent::TogglePlay);
            InputResult::Continue
        }
        KeyCode::Char('r') => {
            let _ = router.dispatch(engine, Intent::Restart);
            InputResult::Continue
        }

        // === Rate selection ===
        KeyCode::Char('s') => {
            let intent = if router.picker().is_open() {
                Intent::CloseRatePicker
            } else {
                Intent::OpenRatePicker
            };
            let _ = router.dispatch(engine, intent);
            InputResult::Continue
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            let _ = router.dispatch(engine, Intent::PickRateOption(index));
            InputResult::Continue
        }

        // === Seeking ===
        KeyCode::Left => {
            let target = engine.state().progress - NUDGE_STEP;
            scrub_gesture(router, engine, target);
            InputResult::Continue
        }
        KeyCode::Right => {
            let target = engine.state().progress + NUDGE_STEP;
            scrub_gesture(router, engine, target);
            InputResult::Continue
        }
        KeyCode::Home => {
            scrub_gesture(router, engine, 0.0);
            InputResult::Continue
        }
        KeyCode::End => {
            scrub_gesture(router, engine, 1.0);
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

/// Perform a complete scrub (start, move, release) to `target`.
///
/// Keys have no drag phase, so a nudge behaves like a click on the track.
fn scrub_gesture<T: Timeline, S: PresentationSink>(
    router: &mut ControlRouter,
    engine: &mut SyncEngine<T, S>,
    target: f64,
) {
    for intent in [
        Intent::ScrubStart,
        Intent::ScrubMove(target),
        Intent::ScrubEnd(target),
    ] {
        let _ = router.dispatch(engine, intent);
    }
}
