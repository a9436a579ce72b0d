//! Terminal control bar.
//!
//! The presentation side of the controls: receives commands from the sync
//! engine, keeps what is currently displayed, draws it with ratatui and
//! remembers where each control landed so mouse input can be hit-tested.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::{bar_area, BAR_HEIGHT};
use super::progress::{format_percent, progress_bar_line};
use super::sink::PresentationSink;
use crate::player::input::RatePicker;
use crate::theme::Theme;

/// Seconds the restart icon spins after a restart.
pub const RESTART_SPIN_SECS: f64 = 0.5;

const RESTART_ICON: char = '⟲';
const SPIN_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Narrowest bar that still fits every control.
const MIN_BAR_WIDTH: u16 = 26;

/// Layout options fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BarOptions {
    /// Rows left free below the bar
    pub bottom: u16,
    pub full_width: bool,
    pub light: bool,
}

/// Screen rectangles of the controls from the last render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    pub play: Rect,
    pub speed: Rect,
    pub track: Rect,
    pub restart: Rect,
    /// One row per rate option while the picker is open
    pub picker: Vec<Rect>,
}

impl HitMap {
    /// Index of the picker entry under `(column, row)`.
    pub fn picker_option_at(&self, column: u16, row: u16) -> Option<usize> {
        self.picker
            .iter()
            .position(|rect| rect.contains(Position::new(column, row)))
    }

    /// Progress value for a column on the track, clamped to the track ends.
    pub fn track_ratio(&self, column: u16) -> f64 {
        if self.track.width <= 1 {
            return 0.0;
        }
        let offset = column.saturating_sub(self.track.x) as f64;
        (offset / (self.track.width - 1) as f64).clamp(0.0, 1.0)
    }
}

/// Displayed state of the transport controls.
#[derive(Debug, Clone)]
pub struct ControlBar {
    playing: bool,
    position: f64,
    speed_label: String,
    /// Seconds into the restart spin, if spinning
    spin: Option<f64>,
    options: BarOptions,
    theme: Theme,
    hits: HitMap,
}

impl ControlBar {
    pub fn new(options: BarOptions) -> Self {
        Self {
            playing: false,
            position: 0.0,
            speed_label: "1x".to_string(),
            spin: None,
            options,
            theme: Theme::for_mode(options.light),
            hits: HitMap::default(),
        }
    }

    pub fn is_showing_playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn speed_label(&self) -> &str {
        &self.speed_label
    }

    pub fn options(&self) -> BarOptions {
        self.options
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// Advance cosmetic animations by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        if let Some(elapsed) = self.spin {
            let elapsed = elapsed + dt;
            self.spin = (elapsed < RESTART_SPIN_SECS).then_some(elapsed);
        }
    }

    /// Glyph for the restart control, rotating while spinning.
    pub fn restart_glyph(&self) -> char {
        match self.spin {
            Some(elapsed) => {
                let turns = elapsed / RESTART_SPIN_SECS * SPIN_FRAMES.len() as f64;
                SPIN_FRAMES[(turns as usize) % SPIN_FRAMES.len()]
            }
            None => RESTART_ICON,
        }
    }

    /// Text of the play/pause control.
    pub fn play_glyph(&self) -> &'static str {
        if self.playing {
            "‖"
        } else {
            "▶"
        }
    }

    /// Draw the bar (and the rate picker when open) into `frame`.
    pub fn render(&mut self, frame: &mut Frame, picker: &RatePicker) {
        let container = frame.area();
        let area = bar_area(container, self.options.bottom, self.options.full_width);
        if area.height < BAR_HEIGHT || area.width < MIN_BAR_WIDTH {
            self.hits = HitMap::default();
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.text_secondary_style())
            .style(self.theme.bar_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [play, _, speed, _, track, _, percent, _, restart] = Layout::horizontal([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(inner);

        let icon = self.theme.icon_style();
        frame.render_widget(
            Paragraph::new(self.play_glyph())
                .style(icon)
                .alignment(Alignment::Center),
            play,
        );
        frame.render_widget(
            Paragraph::new(self.speed_label.as_str())
                .style(icon)
                .alignment(Alignment::Center),
            speed,
        );
        frame.render_widget(
            Paragraph::new(progress_bar_line(
                track.width as usize,
                self.position,
                &self.theme,
            )),
            track,
        );
        frame.render_widget(
            Paragraph::new(format_percent(self.position)).style(icon),
            percent,
        );
        frame.render_widget(
            Paragraph::new(self.restart_glyph().to_string())
                .style(icon)
                .alignment(Alignment::Center),
            restart,
        );

        self.hits = HitMap {
            play,
            speed,
            track,
            restart,
            picker: Vec::new(),
        };

        if picker.is_open() {
            self.render_picker(frame, picker, container, area, speed);
        }
    }

    /// Draw the rate picker above the speed label.
    fn render_picker(
        &mut self,
        frame: &mut Frame,
        picker: &RatePicker,
        container: Rect,
        bar: Rect,
        speed: Rect,
    ) {
        let height = picker.options().len() as u16 + 2;
        let popup = Rect::new(
            speed.x.saturating_sub(1),
            bar.y.saturating_sub(height).max(container.y),
            speed.width + 2,
            height.min(bar.y.saturating_sub(container.y)),
        );
        if popup.height < height {
            return;
        }

        let lines: Vec<Line> = picker
            .options()
            .iter()
            .map(|rate| {
                let style = if rate.label() == self.speed_label {
                    self.theme.accent_bold_style()
                } else {
                    self.theme.icon_style()
                };
                Line::styled(rate.label(), style)
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.text_secondary_style())
            .style(self.theme.bar_style());
        let inner = block.inner(popup);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center),
            popup,
        );

        self.hits.picker = (0..picker.options().len() as u16)
            .map(|i| Rect::new(inner.x, inner.y + i, inner.width, 1))
            .collect();
    }
}

impl PresentationSink for ControlBar {
    fn show_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    fn set_scrub_position(&mut self, progress: f64) {
        self.position = progress.clamp(0.0, 1.0);
    }

    fn set_speed_label(&mut self, label: &str) {
        if self.speed_label != label {
            self.speed_label = label.to_string();
        }
    }

    fn play_restart_animation(&mut self) {
        self.spin = Some(0.0);
    }
}
