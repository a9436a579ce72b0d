//! tlctl - transport controls for animation timelines
//!
//! Binds a control bar to one externally-owned timeline and keeps the two in
//! sync in both directions: the timeline advances on its own schedule while
//! the user can play, pause, scrub, change speed or restart at any time.
//!
//! - `timeline`: the adapter trait and a simulated timeline
//! - `player`: playback state, sync engine, input routing and the control bar
//! - `script`: scripted control sessions
//! - `config`: TOML configuration
//! - `cli`: command-line definition

pub mod cli;
pub mod config;
pub mod error;
pub mod player;
pub mod script;
pub mod theme;
pub mod timeline;

pub use config::Config;
pub use error::ControlError;
pub use player::{Controls, Intent, Rate, Snapshot};
