//! Transport controls for an animation timeline
//!
//! Lets a user observe and manipulate an externally-owned timeline:
//! play/pause, scrub, change speed and restart.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: PlaybackState, Rate and Snapshot
//! - `sync`: the sync engine that owns PlaybackState and reconciles timeline
//!   updates with user input
//! - `input/`: intent routing plus keyboard and mouse mapping
//! - `render/`: presentation sink trait and the terminal control bar
//! - `controls`: builder tying a timeline, engine, router and bar together
//!
//! # Usage
//!
//! ```
//! use tlctl::player::{Controls, Intent};
//! use tlctl::timeline::SimTimeline;
//!
//! let mut controls = Controls::builder()
//!     .timeline(SimTimeline::new(4.0))
//!     .build()
//!     .unwrap();
//! controls.dispatch(Intent::SelectRate(0.5)).unwrap();
//! controls.engine_mut().timeline_mut().advance(2.0);
//! controls.pump();
//! assert_eq!(controls.snapshot().progress, 0.25);
//! ```

mod controls;
pub mod input;
mod native;
pub mod render;
pub mod state;
pub mod sync;

pub use controls::{Controls, ControlsBuilder};
pub use input::{ControlRouter, Intent, RatePicker};
pub use native::run_controls;
pub use state::{InputResult, PlaybackState, Rate, Snapshot};
pub use sync::SyncEngine;
