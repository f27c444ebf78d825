// Presentation constants for the two background effects.
//
// Simulation and scheduling tunables live next to their algorithms in
// `core`; this file only holds the DOM contract (host element ids, the
// config attribute) and stroke/fill styling.

// Host elements the effects attach to. The beam host is any block element;
// the particle host must be a <canvas>.
pub const BEAM_HOST_ID: &str = "bg-beams";
pub const FIELD_CANVAS_ID: &str = "bg-particles";

// Optional attribute on the beam host overriding the concurrency bound.
pub const MAX_ACTIVE_ATTR: &str = "data-max-active";
pub const DEFAULT_MAX_ACTIVE: f64 = 3.0;

// Beam stroke presentation
pub const BEAM_STROKE_WIDTH: &str = "1";
pub const BEAM_GRADIENT_ID: &str = "beam-gradient";
// (offset, color, stop-opacity); transparent tails hide the stroke ends.
pub const BEAM_GRADIENT_STOPS: &[(&str, &str, &str)] = &[
    ("0%", "#18CCFC", "0"),
    ("20%", "#18CCFC", "1"),
    ("50%", "#6344F5", "1"),
    ("80%", "#AE48FF", "1"),
    ("100%", "#AE48FF", "0"),
];
// Static faint copies of every path, drawn once for depth.
pub const BEAM_UNDERLAY_OPACITY: &str = "0.03";
pub const BEAM_UNDERLAY_STROKE: &str = "white";
pub const BEAM_UNDERLAY_STROKE_WIDTH: &str = "0.5";

// Particle presentation
pub const PARTICLE_COLOR: &str = "#4F6DF5";
pub const LINK_ALPHA: f64 = 0.08;
pub const LINK_WIDTH: f64 = 0.5;
