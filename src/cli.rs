//! Command-line interface definition.
//!
//! Lives in the library so the xtask can render the man page from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::Container;

/// Version string with git SHA and build date.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("TLCTL_BUILD_DATE"),
    ")"
);

/// Transport controls for animation timelines
#[derive(Debug, Parser)]
#[command(name = "tlctl", version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Read settings from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the control bar over a simulated timeline
    Play(ControlArgs),

    /// Apply a scripted list of control steps and print the final state as JSON
    ///
    /// Steps are separated by ';': toggle, restart, rate <x>, scrub <p>,
    /// scrub-start, scrub-move <p>, scrub-end <p>, picker, pick <i>, close,
    /// advance <secs>.
    Script {
        /// The steps to apply
        script: String,

        #[command(flatten)]
        controls: ControlArgs,

        /// Print a snapshot after every step (one JSON object per line)
        #[arg(long)]
        trace: bool,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Construction options shared by `play` and `script`. Unset flags fall back
/// to the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct ControlArgs {
    /// Timeline length in seconds
    #[arg(long, value_name = "SECS")]
    pub duration: Option<f64>,

    /// Start with the timeline paused
    #[arg(long, overrides_with = "playing")]
    pub paused: bool,

    /// Start playing even if the config file says paused
    #[arg(long, overrides_with = "paused")]
    pub playing: bool,

    /// Rows left free below the control bar
    #[arg(long, value_name = "ROWS")]
    pub bottom: Option<u16>,

    /// Where to mount the control bar
    #[arg(long, value_enum)]
    pub container: Option<Container>,

    /// Span the full terminal width
    #[arg(long, overrides_with = "no_full_width")]
    pub full_width: bool,

    /// Keep side margins even if the config file says full width
    #[arg(long, overrides_with = "full_width")]
    pub no_full_width: bool,

    /// Use the light palette
    #[arg(long, overrides_with = "dark")]
    pub light: bool,

    /// Use the dark palette even if the config file says light
    #[arg(long, overrides_with = "light")]
    pub dark: bool,

    /// Initial playback rate (0.1, 0.5, 1 or 2)
    #[arg(long, value_name = "RATE")]
    pub rate: Option<f64>,
}

impl ControlArgs {
    /// Paused flag from `--paused`/`--playing`, if either was given.
    pub fn paused_override(&self) -> Option<bool> {
        flag_pair(self.paused, self.playing)
    }

    /// Width from `--full-width`/`--no-full-width`, if either was given.
    pub fn full_width_override(&self) -> Option<bool> {
        flag_pair(self.full_width, self.no_full_width)
    }

    /// Palette from `--light`/`--dark`, if either was given.
    pub fn light_override(&self) -> Option<bool> {
        flag_pair(self.light, self.dark)
    }
}

/// Collapse an on/off flag pair. The pair overrides each other, so at most
/// one is set.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
