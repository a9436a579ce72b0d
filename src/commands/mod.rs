//! Subcommand handlers

pub mod config;
pub mod play;
pub mod script;

use anyhow::Result;

use tlctl::cli::ControlArgs;
use tlctl::timeline::SimTimeline;
use tlctl::{Config, Controls};

/// Merge command-line flags over the config file and build the controls.
pub fn build_controls(config: &Config, args: &ControlArgs) -> Result<Controls<SimTimeline>> {
    let mut player = config.player.clone();
    if let Some(bottom) = args.bottom {
        player.bottom = bottom;
    }
    if let Some(container) = args.container {
        player.container = container;
    }
    if let Some(rate) = args.rate {
        player.rate = rate;
    }
    if let Some(full_width) = args.full_width_override() {
        player.full_width = full_width;
    }
    if let Some(light) = args.light_override() {
        player.light = light;
    }

    let duration = args.duration.unwrap_or(config.timeline.duration_secs);
    let paused = args
        .paused_override()
        .unwrap_or(config.timeline.start_paused);
    let timeline = SimTimeline::new(duration).paused(paused);

    let controls = Controls::builder()
        .timeline(timeline)
        .player_config(&player)?
        .build()?;
    Ok(controls)
}
