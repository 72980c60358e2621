//! Xorshift32, a minimal deterministic PRNG.
//!
//! Generation must be reproducible from a seed (`--seed` on the CLI, a
//! shared palette link), so the sampler is a tiny fixed algorithm rather
//! than a platform RNG.

use std::time::{SystemTime, UNIX_EPOCH};

pub(crate) struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub(crate) fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// A seed derived from the wall clock, for unseeded requests.
    pub(crate) fn clock_seed() -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(1, |d| d.subsec_nanos() ^ (d.as_secs() as u32))
    }

    pub(crate) const fn next(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Random f64 in [lo, hi].
    pub(crate) fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        let t = f64::from(self.next()) / f64::from(u32::MAX);
        (hi - lo).mul_add(t, lo)
    }

    /// Random f64 in [0, 360).
    pub(crate) fn hue(&mut self) -> f64 {
        f64::from(self.next()) / (f64::from(u32::MAX) + 1.0) * 360.0
    }

    /// Pick a random element from a non-empty slice.
    pub(crate) fn pick<'a, T>(&mut self, slice: &'a [T]) -> &'a T {
        let idx = (self.next() as usize) % slice.len();
        &slice[idx]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
