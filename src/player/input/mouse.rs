//! Mouse input handling for the controls.
//!
//! Left button on the track starts a scrub, dragging moves it and release
//! ends it. Clicks on the icons and picker entries emit their intents.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::{ControlRouter, Intent};
use crate::player::render::{HitMap, PresentationSink};
use crate::player::state::InputResult;
use crate::player::sync::SyncEngine;
use crate::timeline::Timeline;

/// Handle a mouse event against the geometry of the last render.
pub fn handle_mouse_event<T: Timeline, S: PresentationSink>(
    mouse: MouseEvent,
    router: &mut ControlRouter,
    engine: &mut SyncEngine<T, S>,
    hits: &HitMap,
) -> InputResult {
    let at = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if router.picker().is_open() {
                let intent = match hits.picker_option_at(mouse.column, mouse.row) {
                    Some(index) => Intent::PickRateOption(index),
                    None => Intent::CloseRatePicker,
                };
                let _ = router.dispatch(engine, intent);
                return InputResult::Continue;
            }

            if hits.track.contains(at) {
                let progress = hits.track_ratio(mouse.column);
                let _ = router.dispatch(engine, Intent::ScrubStart);
                let _ = router.dispatch(engine, Intent::ScrubMove(progress));
            } else if hits.play.contains(at) {
                let _ = router.dispatch(engine, Intent::TogglePlay);
            } else if hits.speed.contains(at) {
                let _ = router.dispatch(engine, Intent::OpenRatePicker);
            } else if hits.restart.contains(at) {
                let _ = router.dispatch(engine, Intent::Restart);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) if engine.state().scrubbing => {
            let progress = hits.track_ratio(mouse.column);
            let _ = router.dispatch(engine, Intent::ScrubMove(progress));
        }
        MouseEventKind::Up(MouseButton::Left) if engine.state().scrubbing => {
            let progress = hits.track_ratio(mouse.column);
            let _ = router.dispatch(engine, Intent::ScrubEnd(progress));
        }
        _ => {}
    }

    InputResult::Continue
}
