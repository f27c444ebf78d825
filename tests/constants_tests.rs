// Host-side tests for constants and generated geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod rng {
    include!("../src/core/rng.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}
mod scheduler {
    include!("../src/core/scheduler.rs");
}
mod timeline {
    include!("../src/core/timeline.rs");
}

use constants::*;
use geometry::*;
use particles::{
    ATTRACT_GAIN, ATTRACT_RADIUS, ATTRACT_STRIDE, LINK_RADIUS, LINK_STRIDE, MAX_PARTICLES,
    SIM_FRAME_STRIDE, WIDTH_PER_PARTICLE,
};
use scheduler::ShowerParams;
use timeline::{DRAW_IN_FRACTION, DRAW_OUT_FRACTION, HOLD_FRACTION, PEAK_OPACITY};

#[test]
fn host_contract_ids_are_distinct_and_non_empty() {
    assert!(!BEAM_HOST_ID.is_empty());
    assert!(!FIELD_CANVAS_ID.is_empty());
    assert_ne!(BEAM_HOST_ID, FIELD_CANVAS_ID);
    assert!(MAX_ACTIVE_ATTR.starts_with("data-"));
    assert!(DEFAULT_MAX_ACTIVE >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_constants_are_within_reasonable_bounds() {
    assert!(MAX_PARTICLES > 0 && MAX_PARTICLES <= 25);
    assert!(WIDTH_PER_PARTICLE > 0.0);
    assert!(ATTRACT_RADIUS > 0.0);
    assert!(ATTRACT_GAIN > 0.0 && ATTRACT_GAIN < 1.0);
    assert!(ATTRACT_STRIDE >= 1);
    assert!(LINK_STRIDE >= 1);
    assert!(SIM_FRAME_STRIDE >= 1);
    // Links must cut off before the pointer pull radius, or the web of lines
    // would visually swallow the interaction.
    assert!(LINK_RADIUS < ATTRACT_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn presentation_alphas_are_valid() {
    assert!(LINK_ALPHA > 0.0 && LINK_ALPHA < 1.0);
    assert!(LINK_WIDTH > 0.0);
    assert!(PEAK_OPACITY > 0.0 && PEAK_OPACITY <= 1.0);
}

#[test]
fn gradient_stops_fade_in_and_out() {
    assert!(BEAM_GRADIENT_STOPS.len() >= 2);
    let first = BEAM_GRADIENT_STOPS.first().unwrap();
    let last = BEAM_GRADIENT_STOPS.last().unwrap();
    assert_eq!(first.0, "0%");
    assert_eq!(last.0, "100%");
    // Transparent tails hide the stroke ends.
    assert_eq!(first.2, "0");
    assert_eq!(last.2, "0");
}

#[test]
fn default_shower_params_have_logical_relationships() {
    let p = ShowerParams::default();
    assert!(p.max_active >= 1);
    assert!(p.max_delay > 0.0);
    assert!(p.duration_range.0 <= p.duration_range.1);
    assert!(p.repeat_delay_range.0 <= p.repeat_delay_range.1);
    assert!(p.cluster_jitter >= 0.0);
    assert!(p.initial_progress_max > 0.0 && p.initial_progress_max <= 100.0);
    // Jitter stays inside the burst window.
    assert!(p.cluster_jitter < p.max_delay);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timeline_stages_partition_the_duration() {
    assert!(DRAW_IN_FRACTION > 0.0);
    assert!(HOLD_FRACTION > 0.0);
    assert!(DRAW_OUT_FRACTION > 0.0);
    assert!((DRAW_IN_FRACTION + HOLD_FRACTION + DRAW_OUT_FRACTION - 1.0).abs() < 1e-12);
}

#[test]
fn beam_paths_match_the_reference_art() {
    assert_eq!(NUM_BEAMS, 20);
    assert_eq!(
        beam_path(0),
        "M-380 -189C-380 -189 -312 216 152 343C616 470 684 875 684 875"
    );
    assert_eq!(
        beam_path(1),
        "M-358 -213C-358 -213 -290 192 174 319C638 446 706 851 706 851"
    );
    assert_eq!(
        beam_path(19),
        "M38 -645C38 -645 106 -240 570 -113C1034 14 1102 419 1102 419"
    );
}

#[test]
fn beam_paths_are_distinct() {
    let mut seen = std::collections::HashSet::new();
    for i in 0..NUM_BEAMS {
        assert!(seen.insert(beam_path(i)), "duplicate path at index {i}");
    }
}
