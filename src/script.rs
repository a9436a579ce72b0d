//! Scripted control sessions.
//!
//! A script is a `;`-separated list of steps applied to the controls in
//! order, for example `scrub 0.4; advance 1.5; rate 2; toggle`. Timeline
//! notifications are processed after every step, exactly as the
//! interactive loop does between events.

use std::fmt;

use tracing::{debug, warn};

use crate::error::ControlError;
use crate::player::{Controls, Intent, Snapshot};
use crate::timeline::SimTimeline;

/// One step of a script.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Feed an intent to the controls
    Intent(Intent),
    /// A whole scrub gesture: start, move to and release at this progress
    Scrub(f64),
    /// Let the timeline run for this many wall-clock seconds
    Advance(f64),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Intent(intent) => write!(f, "{:?}", intent),
            Step::Scrub(progress) => write!(f, "scrub {}", progress),
            Step::Advance(secs) => write!(f, "advance {}", secs),
        }
    }
}

/// Parse a script into steps.
///
/// Steps: `toggle`, `restart`, `rate <x>`, `scrub <p>` (full gesture),
/// `scrub-start`, `scrub-move <p>`, `scrub-end <p>`, `picker`, `pick <i>`,
/// `close`, `advance <secs>`. Empty steps are skipped.
pub fn parse_script(script: &str) -> Result<Vec<Step>, ControlError> {
    let mut steps = Vec::new();
    for raw in script.split(';') {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let mut parts = raw.split_whitespace();
        let word = parts.next().unwrap_or_default();
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(script_error(raw, "too many arguments"));
        }

        match word {
            "toggle" | "play-pause" => steps.push(Step::Intent(Intent::TogglePlay)),
            "restart" => steps.push(Step::Intent(Intent::Restart)),
            "picker" => steps.push(Step::Intent(Intent::OpenRatePicker)),
            "close" => steps.push(Step::Intent(Intent::CloseRatePicker)),
            "scrub-start" => steps.push(Step::Intent(Intent::ScrubStart)),
            "rate" => steps.push(Step::Intent(Intent::SelectRate(number(raw, arg)?))),
            "scrub-move" => steps.push(Step::Intent(Intent::ScrubMove(number(raw, arg)?))),
            "scrub-end" => steps.push(Step::Intent(Intent::ScrubEnd(number(raw, arg)?))),
            "scrub" => steps.push(Step::Scrub(number(raw, arg)?)),
            "pick" => {
                let index = arg
                    .ok_or_else(|| script_error(raw, "missing argument"))?
                    .parse::<usize>()
                    .map_err(|_| script_error(raw, "expected an option index"))?;
                steps.push(Step::Intent(Intent::PickRateOption(index)));
            }
            "advance" => {
                let secs = number(raw, arg)?;
                if secs < 0.0 {
                    return Err(script_error(raw, "cannot advance backwards"));
                }
                steps.push(Step::Advance(secs));
            }
            _ => return Err(script_error(raw, "unknown step")),
        }
    }
    Ok(steps)
}

/// Apply steps to the controls and return the final snapshot.
///
/// Rejected intents are logged and skipped; they never abort the script.
pub fn run_script(controls: &mut Controls<SimTimeline>, steps: &[Step]) -> Snapshot {
    for step in steps {
        match *step {
            Step::Intent(intent) => dispatch(controls, step, intent),
            Step::Scrub(progress) => {
                dispatch(controls, step, Intent::ScrubStart);
                dispatch(controls, step, Intent::ScrubMove(progress));
                dispatch(controls, step, Intent::ScrubEnd(progress));
            }
            Step::Advance(secs) => controls.engine_mut().timeline_mut().advance(secs),
        }
        controls.pump();
        debug!(%step, snapshot = ?controls.snapshot(), "step applied");
    }
    controls.snapshot()
}

fn dispatch(controls: &mut Controls<SimTimeline>, step: &Step, intent: Intent) {
    if let Err(err) = controls.dispatch(intent) {
        warn!(%step, %err, "step ignored");
    }
}

fn number(raw: &str, arg: Option<&str>) -> Result<f64, ControlError> {
    let arg = arg.ok_or_else(|| script_error(raw, "missing argument"))?;
    let value = arg
        .parse::<f64>()
        .map_err(|_| script_error(raw, "expected a number"))?;
    if value.is_nan() {
        return Err(script_error(raw, "expected a number"));
    }
    Ok(value)
}

fn script_error(step: &str, reason: &str) -> ControlError {
    ControlError::Script {
        step: step.to_string(),
        reason: reason.to_string(),
    }
}
