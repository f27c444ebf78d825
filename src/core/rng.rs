// Injectable random source for the effect cores.
//
// Schedules and particle populations are regenerated from ambient entropy on
// every mount, but the algorithms only ever consume uniform unit draws.
// Routing those draws through a trait keeps the cores deterministic under
// test: a seeded or scripted source reproduces exact outcomes.

use rand::Rng;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform draw in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }
}

/// Adapter over any `rand` generator.
pub struct UnitRng<R: Rng>(pub R);

impl<R: Rng> RandomSource for UnitRng<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Fisher-Yates shuffle driven by the injected source.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = (rng.next_unit() * (i + 1) as f64) as usize;
        items.swap(i, j.min(i));
    }
}

/// Uniform index draw in `[0, len)`. `len` must be non-zero.
pub fn pick_index(len: usize, rng: &mut impl RandomSource) -> usize {
    ((rng.next_unit() * len as f64) as usize).min(len - 1)
}
