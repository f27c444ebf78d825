// "Metro shower" scheduling for the background beams.
//
// Every beam gets a randomized delay/duration/rest assignment, but start
// times are clustered around a handful of random centers and serialized
// through a bounded set of channels, so bursts of correlated activity appear
// without ever exceeding `max_active` beams in flight.

use super::rng::{pick_index, shuffle, RandomSource};

/// Timing assigned to one beam for its looping timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamSchedule {
    /// Seconds from mount until the first draw-in starts.
    pub delay: f64,
    /// Active animation time of one cycle.
    pub duration: f64,
    /// Rest between cycles.
    pub repeat_delay: f64,
    /// Fractional position (0-100) along the path at first render.
    pub initial_progress: f64,
    /// Concurrency slot this beam was serialized through.
    pub channel: usize,
}

/// Tunables for [`schedule_shower`].
///
/// Defaults match the reference look. The duration range is much longer than
/// the burst window; that relationship is deliberately a parameter, not a
/// constant.
#[derive(Clone, Copy, Debug)]
pub struct ShowerParams {
    /// Concurrency bound; see [`clamp_max_active`].
    pub max_active: usize,
    /// Window for the initial bursts, seconds.
    pub max_delay: f64,
    /// Uniform range for one cycle's active time, seconds.
    pub duration_range: (f64, f64),
    /// Uniform range for the rest between cycles, seconds.
    pub repeat_delay_range: (f64, f64),
    /// Jitter applied around a cluster center, +/- seconds.
    pub cluster_jitter: f64,
    /// Upper bound for the random initial progress, percent.
    pub initial_progress_max: f64,
}

impl Default for ShowerParams {
    fn default() -> Self {
        Self {
            max_active: 3,
            max_delay: 8.0,
            duration_range: (20.4, 23.0),
            repeat_delay_range: (4.0, 8.0),
            cluster_jitter: 0.5,
            initial_progress_max: 80.0,
        }
    }
}

/// Fallback cycle time for a beam that somehow lacks a computed schedule.
pub const FALLBACK_DURATION: f64 = 2.8;
/// Fallback rest between cycles.
pub const FALLBACK_REPEAT_DELAY: f64 = 5.0;

/// Concurrency bound from raw (possibly fractional or nonsense) host input:
/// floored, never below one channel.
pub fn clamp_max_active(raw: f64) -> usize {
    if raw.is_finite() && raw >= 1.0 {
        raw.floor() as usize
    } else {
        1
    }
}

/// Number of burst centers for a given beam count.
pub fn cluster_count(num_beams: usize) -> usize {
    (num_beams / 6).max(2)
}

/// Defensive timing for a beam without a computed schedule.
pub fn fallback_schedule(max_delay: f64, rng: &mut impl RandomSource) -> BeamSchedule {
    BeamSchedule {
        delay: rng.range(0.0, max_delay),
        duration: FALLBACK_DURATION,
        repeat_delay: FALLBACK_REPEAT_DELAY,
        initial_progress: rng.range(0.0, 80.0),
        channel: 0,
    }
}

/// Assign every beam a start/duration/rest so that at most
/// `params.max_active` beams are ever in flight.
///
/// Beams are visited in random order. Each draws its cycle timing, picks a
/// jittered cluster center as the desired start, and is placed on the channel
/// with the earliest `next_available` time (ties to the lowest index). The
/// actual start is `max(desired, channel free time)`, and the channel then
/// advances past the full cycle, so per-channel intervals never overlap.
pub fn schedule_shower(
    num_beams: usize,
    params: &ShowerParams,
    rng: &mut impl RandomSource,
) -> Vec<BeamSchedule> {
    let centers: Vec<f64> = (0..cluster_count(num_beams))
        .map(|_| rng.range(0.0, params.max_delay))
        .collect();

    let mut order: Vec<usize> = (0..num_beams).collect();
    shuffle(&mut order, rng);

    // next-available time per channel
    let mut channels = vec![0.0_f64; params.max_active.max(1)];
    let mut schedules = vec![None::<BeamSchedule>; num_beams];

    for i in order {
        let (d_lo, d_hi) = params.duration_range;
        let duration = rng.range(d_lo, d_hi);
        let (r_lo, r_hi) = params.repeat_delay_range;
        let repeat_delay = rng.range(r_lo, r_hi);

        let center = centers[pick_index(centers.len(), rng)];
        let jitter = (rng.next_unit() - 0.5) * 2.0 * params.cluster_jitter;
        let desired = (center + jitter).max(0.0);

        let mut best = 0;
        for c in 1..channels.len() {
            if channels[c] < channels[best] {
                best = c;
            }
        }
        let start = desired.max(channels[best]);
        channels[best] = start + duration + repeat_delay;

        schedules[i] = Some(BeamSchedule {
            delay: start,
            duration,
            repeat_delay,
            initial_progress: rng.range(0.0, params.initial_progress_max),
            channel: best,
        });
    }

    schedules
        .into_iter()
        .map(|s| s.unwrap_or_else(|| fallback_schedule(params.max_delay, rng)))
        .collect()
}
