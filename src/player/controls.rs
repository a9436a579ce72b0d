//! Transport controls bound to one timeline.

use crossterm::event::Event;
use ratatui::Frame;
use tracing::info;

use super::input::{self, ControlRouter, Intent};
use super::render::{BarOptions, ControlBar};
use super::state::{InputResult, Rate, Snapshot};
use super::sync::SyncEngine;
use crate::config::{Container, PlayerConfig};
use crate::error::ControlError;
use crate::timeline::Timeline;

/// Builder for [`Controls`]. The timeline is required.
pub struct ControlsBuilder<T: Timeline> {
    timeline: Option<T>,
    bar: BarOptions,
    container: Container,
    rate: Option<Rate>,
}

impl<T: Timeline> Default for ControlsBuilder<T> {
    fn default() -> Self {
        Self {
            timeline: None,
            bar: BarOptions {
                bottom: 1,
                ..Default::default()
            },
            container: Container::default(),
            rate: None,
        }
    }
}

impl<T: Timeline> ControlsBuilder<T> {
    pub fn timeline(mut self, timeline: T) -> Self {
        self.timeline = Some(timeline);
        self
    }

    /// Rows left free below the bar.
    pub fn bottom(mut self, rows: u16) -> Self {
        self.bar.bottom = rows;
        self
    }

    pub fn container(mut self, container: Container) -> Self {
        self.container = container;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.bar.full_width = full_width;
        self
    }

    pub fn light(mut self, light: bool) -> Self {
        self.bar.light = light;
        self
    }

    /// Rate applied right after attaching.
    pub fn rate(mut self, rate: Rate) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Take layout, theme and rate from a config section.
    pub fn player_config(mut self, config: &PlayerConfig) -> Result<Self, ControlError> {
        let rate = Rate::from_value(config.rate)
            .ok_or(ControlError::UnsupportedRate(config.rate))?;
        self.bar = config.bar_options();
        Ok(self.container(config.container).rate(rate))
    }

    /// Validate the timeline and attach to it.
    pub fn build(self) -> Result<Controls<T>, ControlError> {
        let timeline = self.timeline.ok_or(ControlError::MissingTimeline)?;
        timeline.validate()?;

        let mut engine = SyncEngine::new(timeline, ControlBar::new(self.bar));
        if let Some(rate) = self.rate {
            if Rate::from_value(engine.timeline().rate()) != Some(rate) {
                engine.set_rate(rate);
            }
        }
        info!(container = ?self.container, options = ?self.bar, "controls attached");

        Ok(Controls {
            engine,
            router: ControlRouter::new(),
            container: self.container,
        })
    }
}

/// The transport controls: sync engine, input router and control bar.
pub struct Controls<T: Timeline> {
    engine: SyncEngine<T, ControlBar>,
    router: ControlRouter,
    container: Container,
}

impl<T: Timeline> Controls<T> {
    pub fn builder() -> ControlsBuilder<T> {
        ControlsBuilder::default()
    }

    /// Apply a user intent.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), ControlError> {
        self.router.dispatch(&mut self.engine, intent)
    }

    /// Process pending timeline notifications.
    pub fn pump(&mut self) -> bool {
        self.engine.pump()
    }

    /// Route a terminal event through the keyboard/mouse handlers.
    pub fn handle_event(&mut self, event: Event) -> InputResult {
        let hits = self.engine.sink().hits().clone();
        input::handle_event(event, &mut self.router, &mut self.engine, &hits)
    }

    /// Advance cosmetic animations.
    pub fn tick_animations(&mut self, dt: f64) {
        self.engine.sink_mut().tick(dt);
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let picker = self.router.picker();
        self.engine.sink_mut().render(frame, picker);
    }

    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    pub fn container(&self) -> Container {
        self.container
    }

    pub fn bar(&self) -> &ControlBar {
        self.engine.sink()
    }

    pub fn router(&self) -> &ControlRouter {
        &self.router
    }

    pub fn engine(&self) -> &SyncEngine<T, ControlBar> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SyncEngine<T, ControlBar> {
        &mut self.engine
    }
}
