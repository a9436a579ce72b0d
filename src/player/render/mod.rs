//! Presentation layer for the controls.
//!
//! The sync engine only talks to the [`PresentationSink`] trait. The
//! terminal implementation is [`ControlBar`], which draws with ratatui.

mod bar;
mod layout;
mod progress;
mod sink;

pub use bar::{BarOptions, ControlBar, HitMap, RESTART_SPIN_SECS};
pub use layout::{bar_area, BAR_HEIGHT};
pub use progress::{build_progress_bar_chars, format_percent, progress_bar_line};
pub use sink::PresentationSink;
