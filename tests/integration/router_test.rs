//! Integration tests for intent routing through the controls

use tlctl::player::{Controls, Intent, Rate};
use tlctl::timeline::{SimTimeline, Timeline};
use tlctl::ControlError;

fn controls(timeline: SimTimeline) -> Controls<SimTimeline> {
    Controls::builder().timeline(timeline).build().unwrap()
}

#[test]
fn building_without_timeline_is_fatal() {
    let err = Controls::<SimTimeline>::builder()
        .light(true)
        .build()
        .err()
        .expect("build should fail");
    assert!(matches!(err, ControlError::MissingTimeline));
}

#[test]
fn scrub_release_always_resumes() {
    let mut c = controls(SimTimeline::new(10.0).paused(true));
    c.dispatch(Intent::ScrubStart).unwrap();
    c.dispatch(Intent::ScrubMove(0.2)).unwrap();
    c.dispatch(Intent::ScrubEnd(0.4)).unwrap();
    c.pump();

    let snap = c.snapshot();
    assert!(snap.playing);
    assert!(!snap.scrubbing);
    assert_eq!(snap.progress, 0.4);
    assert!(!c.engine().timeline().is_paused());
}

#[test]
fn scrub_move_touches_display_only() {
    let mut c = controls(SimTimeline::new(10.0));
    c.dispatch(Intent::ScrubStart).unwrap();
    c.dispatch(Intent::ScrubMove(0.8)).unwrap();

    assert_eq!(c.bar().position(), 0.8);
    assert_eq!(c.engine().timeline().progress(), 0.0);
    assert_eq!(c.engine().timeline().calls().seek, 0);
}

#[test]
fn restart_after_finish_plays_again() {
    let mut c = controls(SimTimeline::new(1.0));
    c.engine_mut().timeline_mut().advance(2.0);
    c.pump();
    assert!(!c.snapshot().playing);

    c.dispatch(Intent::Restart).unwrap();
    c.pump();
    assert!(c.snapshot().playing);
    assert_eq!(c.snapshot().progress, 0.0);
    assert!(c.bar().is_showing_playing());
    assert!(c.bar().is_spinning());
}

#[test]
fn unsupported_rate_leaves_everything_unchanged() {
    let mut c = controls(SimTimeline::new(10.0).at(0.3));
    c.dispatch(Intent::OpenRatePicker).unwrap();
    let before = c.snapshot();

    let result = c.dispatch(Intent::SelectRate(1.5));

    assert!(matches!(result, Err(ControlError::UnsupportedRate(_))));
    assert_eq!(c.snapshot(), before);
    assert_eq!(c.bar().speed_label(), "1x");
    assert!(c.router().picker().is_open());
    assert!(c.engine().timeline().calls().set_rate.is_empty());
}

#[test]
fn every_picker_option_maps_to_its_rate() {
    for (index, rate) in Rate::ALL.into_iter().enumerate() {
        let mut c = controls(SimTimeline::new(10.0));
        c.dispatch(Intent::OpenRatePicker).unwrap();
        c.dispatch(Intent::PickRateOption(index)).unwrap();
        assert_eq!(c.snapshot().rate, rate.value());
        assert_eq!(c.bar().speed_label(), rate.label());
    }
}

#[test]
fn toggle_during_scrub_is_allowed() {
    let mut c = controls(SimTimeline::new(10.0));
    c.dispatch(Intent::ScrubStart).unwrap();
    c.dispatch(Intent::TogglePlay).unwrap();
    assert!(!c.snapshot().playing);
    assert!(c.snapshot().scrubbing);

    c.dispatch(Intent::ScrubEnd(0.5)).unwrap();
    assert!(c.snapshot().playing);
}

#[test]
fn timeline_driven_progress_reaches_bar() {
    let mut c = controls(SimTimeline::new(8.0));
    c.dispatch(Intent::SelectRate(2.0)).unwrap();
    c.engine_mut().timeline_mut().advance(1.0);
    c.pump();
    assert_eq!(c.bar().position(), 0.25);
}
