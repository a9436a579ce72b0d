//! Shared helpers for integration tests

use std::path::Path;

use assert_cmd::Command;
use tlctl::player::render::PresentationSink;
use tlctl::player::SyncEngine;
use tlctl::timeline::SimTimeline;

/// A command sent to a presentation sink.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCommand {
    ShowPlaying(bool),
    ScrubPosition(f64),
    SpeedLabel(String),
    RestartAnimation,
}

/// Sink that records every command in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<SinkCommand>,
}

impl RecordingSink {
    /// Last `show_playing` value pushed.
    pub fn last_playing(&self) -> Option<bool> {
        self.commands.iter().rev().find_map(|c| match c {
            SinkCommand::ShowPlaying(playing) => Some(*playing),
            _ => None,
        })
    }

    /// Last scrub position pushed.
    pub fn last_position(&self) -> Option<f64> {
        self.commands.iter().rev().find_map(|c| match c {
            SinkCommand::ScrubPosition(p) => Some(*p),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl PresentationSink for RecordingSink {
    fn show_playing(&mut self, playing: bool) {
        self.commands.push(SinkCommand::ShowPlaying(playing));
    }

    fn set_scrub_position(&mut self, progress: f64) {
        self.commands.push(SinkCommand::ScrubPosition(progress));
    }

    fn set_speed_label(&mut self, label: &str) {
        let label = label.to_string();
        self.commands.push(SinkCommand::SpeedLabel(label));
    }

    fn play_restart_animation(&mut self) {
        self.commands.push(SinkCommand::RestartAnimation);
    }
}

/// Engine over a simulated timeline with a recording sink.
pub fn engine(timeline: SimTimeline) -> SyncEngine<SimTimeline, RecordingSink> {
    SyncEngine::new(timeline, RecordingSink::default())
}

/// tlctl binary with a private (possibly missing) config file.
pub fn tlctl(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tlctl"));
    cmd.arg("--config")
        .arg(config)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "warn");
    cmd
}
