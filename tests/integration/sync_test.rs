//! Integration tests for the sync engine's two-way synchronization

use super::helpers::{engine, SinkCommand};
use tlctl::player::Rate;
use tlctl::timeline::{SimTimeline, Timeline};

#[test]
fn scrub_end_clamps_out_of_range_progress() {
    for (input, expected) in [(-3.0, 0.0), (-0.01, 0.0), (1.01, 1.0), (42.0, 1.0)] {
        let mut e = engine(SimTimeline::new(10.0));
        e.begin_scrub();
        e.end_scrub(input);
        assert_eq!(e.state().progress, expected, "input {input}");
        assert_eq!(e.timeline().progress(), expected, "input {input}");
    }
}

#[test]
fn toggle_twice_from_paused_calls_play_and_pause_once() {
    let mut e = engine(SimTimeline::new(10.0).paused(true));
    assert!(!e.state().playing);

    e.toggle_play();
    e.toggle_play();

    assert!(!e.state().playing);
    assert_eq!(e.timeline().calls().play, 1);
    assert_eq!(e.timeline().calls().pause, 1);
}

#[test]
fn timeline_update_during_scrub_does_not_move_display() {
    let mut e = engine(SimTimeline::new(10.0));
    e.begin_scrub();
    e.scrub_to(0.3);
    e.sink_mut().clear();

    // The timeline moves on its own while the user drags
    e.timeline_mut().seek(0.9);
    e.pump();

    assert_eq!(e.state().progress, 0.3);
    assert!(e.sink().commands.is_empty());

    e.end_scrub(0.3);
    e.timeline_mut().advance(1.0);
    e.pump();
    assert_eq!(e.state().progress, e.timeline().progress());
    assert_eq!(e.sink().last_position(), Some(e.timeline().progress()));
}

#[test]
fn finished_but_unpaused_timeline_shows_play_icon() {
    let mut e = engine(SimTimeline::new(10.0).at(0.95));
    assert!(e.state().playing);
    e.sink_mut().clear();

    e.timeline_mut().advance(5.0);
    assert_eq!(e.timeline().progress(), 1.0);
    assert!(!e.timeline().is_paused());

    e.pump();
    assert!(!e.state().playing);
    assert!(e.sink().commands.contains(&SinkCommand::ShowPlaying(false)));
    assert_eq!(e.sink().last_playing(), Some(false));
}

#[test]
fn restart_from_paused_midpoint_keeps_rate() {
    let mut e = engine(SimTimeline::new(10.0).at(0.5).paused(true).with_rate(2.0));
    let before = e.snapshot();
    assert_eq!(before.progress, 0.5);
    assert!(!before.playing);
    assert_eq!(before.rate, 2.0);

    e.restart();

    let after = e.snapshot();
    assert_eq!(after.progress, 0.0);
    assert!(after.playing);
    assert_eq!(after.rate, 2.0);
    assert_eq!(e.timeline().calls().restart, 1);
    assert!(e.sink().commands.contains(&SinkCommand::RestartAnimation));
}

#[test]
fn rate_selection_changes_only_rate() {
    for (progress, paused) in [(0.0, false), (0.4, true), (1.0, false)] {
        let mut e = engine(SimTimeline::new(10.0).at(progress).paused(paused));
        let before = e.snapshot();

        e.set_rate(Rate::Half);

        let after = e.snapshot();
        assert_eq!(after.rate, 0.5);
        assert_eq!(after.progress, before.progress);
        assert_eq!(after.playing, before.playing);
        assert_eq!(e.timeline().calls().set_rate, vec![0.5]);
    }
}

#[test]
fn rate_selection_updates_label_without_waiting_for_tick() {
    let mut e = engine(SimTimeline::new(10.0).paused(true));
    e.sink_mut().clear();
    e.set_rate(Rate::Tenth);
    assert!(e
        .sink()
        .commands
        .contains(&SinkCommand::SpeedLabel("0.1x".to_string())));
}

#[test]
fn queued_notifications_collapse_into_one_read() {
    let mut e = engine(SimTimeline::new(10.0));
    e.sink_mut().clear();
    e.timeline_mut().advance(1.0);
    e.timeline_mut().advance(1.0);
    e.timeline_mut().advance(1.0);

    assert!(e.pump());
    let positions: Vec<_> = e
        .sink()
        .commands
        .iter()
        .filter(|c| matches!(c, SinkCommand::ScrubPosition(_)))
        .collect();
    assert_eq!(positions.len(), 1);
    assert!((e.state().progress - 0.3).abs() < 1e-9);
}

#[test]
fn playback_reaches_end_from_ticks() {
    let mut e = engine(SimTimeline::new(2.0));
    for _ in 0..30 {
        e.timeline_mut().advance(0.1);
        e.pump();
    }
    assert_eq!(e.state().progress, 1.0);
    assert!(!e.state().playing);
}
