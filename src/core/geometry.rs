// Beam path geometry.
//
// The reference art is one cubic curve stamped twenty times along a
// diagonal: each successive path is the previous one translated by
// (+22, -24) viewBox units. Generating the data keeps the set in one place
// and makes the translation rule explicit.

pub const NUM_BEAMS: usize = 20;
pub const VIEW_BOX: &str = "0 0 696 316";

const BASE_X: i32 = -380;
const BASE_Y: i32 = -189;
const STEP_X: i32 = 22;
const STEP_Y: i32 = -24;

/// SVG path data for beam `index`.
pub fn beam_path(index: usize) -> String {
    let x = BASE_X + STEP_X * index as i32;
    let y = BASE_Y + STEP_Y * index as i32;
    format!(
        "M{x} {y}C{x} {y} {} {} {} {}C{} {} {} {} {} {}",
        x + 68,
        y + 405,
        x + 532,
        y + 532,
        x + 996,
        y + 659,
        x + 1064,
        y + 1064,
        x + 1064,
        y + 1064,
    )
}
