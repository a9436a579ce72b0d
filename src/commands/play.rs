//! Play command handler

use anyhow::Result;

use tlctl::cli::ControlArgs;
use tlctl::player::run_controls;
use tlctl::theme::current_theme;
use tlctl::Config;

use super::build_controls;

/// Open the interactive control bar.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, args: &ControlArgs) -> Result<()> {
    let mut controls = build_controls(config, args)?;
    let snapshot = run_controls(&mut controls)?;

    let status = if snapshot.playing {
        "playing"
    } else {
        "paused"
    };
    let theme = current_theme();
    println!(
        "{}",
        theme.secondary_text(&format!(
            "Stopped at {:.0}% ({}, {}x)",
            snapshot.progress * 100.0,
            status,
            snapshot.rate
        ))
    );
    Ok(())
}
