//! Interactive terminal session.
//!
//! Drives a simulated timeline from wall-clock time, draws a small stage
//! (a marker travelling left to right with the timeline) and the control
//! bar, and feeds terminal input to the controls until the user quits.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal, TerminalOptions, Viewport,
};
use tracing::info;

use super::controls::Controls;
use super::render::{bar_area, BAR_HEIGHT};
use super::state::{InputResult, Snapshot};
use crate::config::Container;
use crate::theme::Theme;
use crate::timeline::SimTimeline;

/// Target frame interval.
const FRAME: Duration = Duration::from_millis(16);

/// Rows reserved for an inline viewport (stage, picker and bar).
const INLINE_ROWS: u16 = 12;

/// Restores the terminal when dropped, even on early return.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    container: Container,
}

impl TerminalGuard {
    #[cfg(not(tarpaulin_include))]
    fn enter(container: Container) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        match container {
            Container::Fullscreen => execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?,
            Container::Inline => execute!(stdout, EnableMouseCapture)?,
        }
        let viewport = match container {
            Container::Fullscreen => Viewport::Fullscreen,
            Container::Inline => Viewport::Inline(INLINE_ROWS),
        };
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::with_options(backend, TerminalOptions { viewport })?;
        Ok(Self {
            terminal,
            container,
        })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let backend = self.terminal.backend_mut();
        let _ = match self.container {
            Container::Fullscreen => execute!(backend, LeaveAlternateScreen, DisableMouseCapture),
            Container::Inline => execute!(backend, DisableMouseCapture),
        };
        let _ = self.terminal.show_cursor();
    }
}

/// Run the controls interactively until the user quits.
///
/// Returns the final playback snapshot.
#[cfg(not(tarpaulin_include))]
pub fn run_controls(controls: &mut Controls<SimTimeline>) -> Result<Snapshot> {
    let mut guard = TerminalGuard::enter(controls.container())?;
    let mut last = Instant::now();
    info!("interactive session started");

    loop {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f64();
        last = now;

        controls.engine_mut().timeline_mut().advance(dt);
        controls.pump();
        controls.tick_animations(dt);

        guard.terminal.draw(|frame| {
            let options = controls.bar().options();
            let bar = bar_area(frame.area(), options.bottom, options.full_width);
            let stage = stage_area(frame.area(), bar);
            render_stage(frame, stage, &controls.snapshot(), controls.bar().theme());
            controls.render(frame);
        })?;

        if event::poll(FRAME)? {
            let event = event::read()?;
            if controls.handle_event(event) == InputResult::Quit {
                break;
            }
            controls.pump();
        }
    }

    let snapshot = controls.snapshot();
    info!(?snapshot, "interactive session ended");
    Ok(snapshot)
}

/// Area above the bar (and its picker headroom) used for the stage.
pub fn stage_area(container: Rect, bar: Rect) -> Rect {
    let height = bar.y.saturating_sub(container.y);
    Rect::new(container.x, container.y, container.width, height)
}

/// Column of the stage marker for a given progress.
pub fn marker_column(inner: Rect, progress: f64) -> u16 {
    if inner.width == 0 {
        return inner.x;
    }
    let span = (inner.width - 1) as f64;
    inner.x + (progress.clamp(0.0, 1.0) * span).round() as u16
}

/// Draw the stage: a box with a marker positioned by progress.
pub fn render_stage(frame: &mut Frame, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    if area.height < BAR_HEIGHT || area.width < 3 {
        return;
    }
    let status = if snapshot.scrubbing {
        "scrubbing"
    } else if snapshot.playing {
        "playing"
    } else {
        "stopped"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(format!(" timeline - {} ", status));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }
    let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
    let column = marker_column(inner, snapshot.progress);
    let mut text = " ".repeat((column - inner.x) as usize);
    text.push('■');
    frame.render_widget(
        Paragraph::new(Line::styled(text, theme.accent_style())),
        row,
    );
}
