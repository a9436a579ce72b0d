//! Presentation sink contract.

/// One-way commands from the sync engine to whatever draws the controls.
///
/// A sink never calls back into the engine.
pub trait PresentationSink {
    /// Show the pause icon when `playing`, the play icon otherwise.
    fn show_playing(&mut self, playing: bool);

    /// Move the scrub control to `progress` in `[0, 1]`.
    fn set_scrub_position(&mut self, progress: f64);

    fn set_speed_label(&mut self, label: &str);

    /// Spin the restart icon.
    fn play_restart_animation(&mut self);
}
