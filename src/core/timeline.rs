// Three-stage looping timeline for one beam.
//
// A cycle draws the stroke in, holds it fully visible, then retracts and
// fades it, and finally rests for the schedule's `repeat_delay` before
// repeating forever. Evaluation is a pure function of elapsed time, so one
// frame loop can drive every beam with no per-beam timer bookkeeping.

use super::scheduler::BeamSchedule;

/// Fraction of the active duration spent drawing the stroke in.
pub const DRAW_IN_FRACTION: f64 = 0.35;
/// Fraction spent fully visible.
pub const HOLD_FRACTION: f64 = 0.45;
/// Fraction spent retracting and fading out.
pub const DRAW_OUT_FRACTION: f64 = 0.20;

/// Peak stroke opacity while a beam is held fully drawn.
pub const PEAK_OPACITY: f64 = 0.7;

/// Quadratic ease-in-out over `[0, 1]`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Stroke state for one beam at one instant.
///
/// `dash_offset` is in path-length units: `0` is fully drawn, `path_length`
/// is fully retracted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamFrame {
    pub dash_offset: f64,
    pub opacity: f64,
}

/// Evaluate a beam's looping timeline `elapsed` seconds after mount.
///
/// Before the scheduled delay the beam sits invisible at its initial
/// progress. The first cycle draws in from that position; every later cycle
/// draws in from a fully retracted stroke.
pub fn eval_beam(sched: &BeamSchedule, path_length: f64, elapsed: f64) -> BeamFrame {
    let resting = BeamFrame {
        dash_offset: path_length,
        opacity: 0.0,
    };
    if sched.duration <= 0.0 {
        return resting;
    }

    let parked_offset = path_length * (1.0 - sched.initial_progress / 100.0);
    if elapsed < sched.delay {
        return BeamFrame {
            dash_offset: parked_offset,
            opacity: 0.0,
        };
    }

    let cycle_len = sched.duration + sched.repeat_delay;
    let since = elapsed - sched.delay;
    let cycle = (since / cycle_len).floor();
    let t = since - cycle * cycle_len;
    let from_offset = if cycle == 0.0 { parked_offset } else { path_length };

    let draw_in = sched.duration * DRAW_IN_FRACTION;
    let hold = sched.duration * HOLD_FRACTION;
    let draw_out = sched.duration * DRAW_OUT_FRACTION;

    if t < draw_in {
        let k = ease_in_out(t / draw_in);
        BeamFrame {
            dash_offset: from_offset * (1.0 - k),
            opacity: PEAK_OPACITY * k,
        }
    } else if t < draw_in + hold {
        BeamFrame {
            dash_offset: 0.0,
            opacity: PEAK_OPACITY,
        }
    } else if t < draw_in + hold + draw_out {
        let k = ease_in_out((t - draw_in - hold) / draw_out);
        BeamFrame {
            dash_offset: path_length * k,
            opacity: PEAK_OPACITY * (1.0 - k),
        }
    } else {
        resting
    }
}
