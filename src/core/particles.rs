// Pointer-reactive ambient particle field.
//
// A small population of drifting dots with wraparound bounds, a mild pull
// toward the pointer, and proximity links between pairs. Population size is
// fixed at spawn time; only the drawing surface reacts to later resizes.

use super::rng::RandomSource;
use glam::Vec2;

/// Hard cap on the population, keeping the pair scan cheap.
pub const MAX_PARTICLES: usize = 25;
/// One particle per this many pixels of viewport width, up to the cap.
pub const WIDTH_PER_PARTICLE: f32 = 60.0;
/// Pointer influence radius, canvas units.
pub const ATTRACT_RADIUS: f32 = 150.0;
/// Velocity gain at zero distance; tapers linearly to zero at the radius edge.
pub const ATTRACT_GAIN: f32 = 0.02;
/// Pointer forces apply to every N-th particle only.
pub const ATTRACT_STRIDE: usize = 5;
/// Particles further apart than this are not linked.
pub const LINK_RADIUS: f32 = 120.0;
/// The pair scan considers every N-th particle only.
pub const LINK_STRIDE: usize = 2;
/// The field advances once per this many scheduled frames.
pub const SIM_FRAME_STRIDE: u64 = 2;

const SPEED_SPAN: f32 = 0.3;
const RADIUS_RANGE: (f64, f64) = (1.0, 3.0);
const OPACITY_RANGE: (f64, f64) = (0.1, 0.4);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub bounds: Vec2,
}

/// Population size for a viewport width: `min(25, floor(width / 60))`.
pub fn population_for_width(width: f32) -> usize {
    let scaled = (width / WIDTH_PER_PARTICLE).floor().max(0.0) as usize;
    scaled.min(MAX_PARTICLES)
}

/// Modular wraparound into `[0, bound)`. Never reflects or clamps.
#[inline]
pub fn wrap(v: f32, bound: f32) -> f32 {
    if bound <= 0.0 {
        return 0.0;
    }
    let r = v.rem_euclid(bound);
    if r >= bound {
        0.0
    } else {
        r
    }
}

impl ParticleField {
    /// Generate a fresh population sized for the given surface.
    pub fn spawn(width: f32, height: f32, rng: &mut impl RandomSource) -> Self {
        let count = population_for_width(width);
        let particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(
                    rng.range(0.0, width as f64) as f32,
                    rng.range(0.0, height as f64) as f32,
                ),
                vel: Vec2::new(
                    (rng.next_unit() as f32 - 0.5) * SPEED_SPAN,
                    (rng.next_unit() as f32 - 0.5) * SPEED_SPAN,
                ),
                radius: rng.range(RADIUS_RANGE.0, RADIUS_RANGE.1) as f32,
                opacity: rng.range(OPACITY_RANGE.0, OPACITY_RANGE.1) as f32,
            })
            .collect();
        Self {
            particles,
            bounds: Vec2::new(width, height),
        }
    }

    /// Advance one simulated frame.
    ///
    /// `pointer` is the last known pointer position in canvas units; it is
    /// only read here, so the input handler can overwrite it between frames
    /// without coordination. Forces perturb velocity, never reset it.
    pub fn step(&mut self, pointer: Vec2) {
        let bounds = self.bounds;
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.pos += p.vel;
            p.pos.x = wrap(p.pos.x, bounds.x);
            p.pos.y = wrap(p.pos.y, bounds.y);

            if i % ATTRACT_STRIDE == 0 {
                let to_pointer = pointer - p.pos;
                let dist = to_pointer.length();
                if dist > 0.0 && dist < ATTRACT_RADIUS {
                    let falloff = (ATTRACT_RADIUS - dist) / ATTRACT_RADIUS;
                    p.vel += to_pointer / dist * falloff * ATTRACT_GAIN;
                }
            }
        }
    }

    /// Collect endpoint pairs to link this frame.
    ///
    /// Only every [`LINK_STRIDE`]-th particle participates; skipping the rest
    /// is a deliberate accuracy/cost tradeoff, not an oversight.
    pub fn links(&self, out: &mut Vec<(Vec2, Vec2)>) {
        out.clear();
        let n = self.particles.len();
        let mut i = 0;
        while i < n {
            let mut j = i + LINK_STRIDE;
            while j < n {
                let a = self.particles[i].pos;
                let b = self.particles[j].pos;
                if a.distance(b) < LINK_RADIUS {
                    out.push((a, b));
                }
                j += LINK_STRIDE;
            }
            i += LINK_STRIDE;
        }
    }
}
