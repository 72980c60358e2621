//! Palette generation.
//!
//! Slots are filled left to right. Each free slot gets the hue its
//! harmony mode assigns, and saturation/lightness drawn from the mood's
//! bands. A candidate is kept only if it meets the contrast floor against
//! its left neighbor and, when that neighbor is locked, its right one.
//!
//! Rejected slots are resampled a bounded number of times. If no sample
//! passes, the best one is moved along the lightness axis, but never out
//! of the mood's lightness band (capped for dark mode). When no lightness
//! inside the band clears the floor, the best candidate seen, band edges
//! included, is accepted as-is. Generation always returns exactly the
//! requested number of colors, and every generated color stays in band.

use hf_color::Color;
use tracing::{debug, trace, warn};

use crate::constraints::GenerationConstraints;
use crate::contrast::{contrast_ratio, ensure_contrast_in_band};
use crate::error::{PaletteError, Result};
use crate::harmony::HarmonyMode;
use crate::mood::Band;
use crate::palette::{MAX_COLORS, MIN_COLORS, Palette};
use crate::rng::Xorshift32;

/// Samples tried per slot before falling back to repair.
pub const MAX_ATTEMPTS_PER_SLOT: usize = 48;

/// Lightness jitter around each monochromatic step (percent).
const MONO_LIGHTNESS_JITTER: f64 = 3.0;

/// Saturation below which a locked color cannot seed the base hue.
const MIN_SEED_SATURATION: f64 = 5.0;

/// Generate a palette of `count` colors.
///
/// The harmony mode, mood, contrast floor, dark-mode flag, base hue and
/// seed all come from `constraints`.
///
/// # Errors
///
/// Fails only on invalid input: `count` outside 2–8 or constraints that
/// do not validate. Unsatisfiable constraint combinations still produce
/// a palette.
pub fn generate(count: usize, constraints: &GenerationConstraints) -> Result<Palette> {
    generate_locked(&vec![None; count], constraints)
}

/// Generate a palette around pinned colors.
///
/// `slots` has one entry per output position: `Some` colors are kept
/// unchanged at their index, `None` positions are generated. With every
/// slot locked, the locked colors are returned as the palette.
///
/// # Errors
///
/// Same as [`generate`], with the count taken from `slots.len()`.
pub fn generate_locked(
    slots: &[Option<Color>],
    constraints: &GenerationConstraints,
) -> Result<Palette> {
    let count = slots.len();
    if !(MIN_COLORS..=MAX_COLORS).contains(&count) {
        return Err(PaletteError::InvalidLength { len: count });
    }
    constraints.validate()?;

    if slots.iter().all(Option::is_some) {
        return Palette::new(slots.iter().flatten().copied().collect());
    }

    let seed = constraints.seed.unwrap_or_else(Xorshift32::clock_seed);
    let mut rng = Xorshift32::new(seed);
    let mode = constraints.harmony_mode.resolve(&mut rng);
    let base_hue = constraints
        .base_hue
        .or_else(|| locked_base_hue(slots))
        .unwrap_or_else(|| rng.hue());
    let hues = mode.hues(base_hue, count, &mut rng);

    let sampler = Sampler {
        mode,
        count,
        saturation: constraints.mood.saturation(),
        lightness: constraints.mood.lightness_for(constraints.dark_mode_friendly),
    };
    let floor = constraints.min_adjacent_contrast;

    debug!(
        %mode,
        mood = %constraints.mood,
        base_hue,
        seed,
        count,
        locked = slots.iter().filter(|s| s.is_some()).count(),
        "generating palette"
    );

    let mut filled: Vec<Color> = Vec::with_capacity(count);
    for (index, slot) in slots.iter().enumerate() {
        let color = match *slot {
            Some(locked) => locked,
            None => {
                let neighbors = Neighbors {
                    left: filled.last().copied(),
                    right: slots.get(index + 1).copied().flatten(),
                };
                fill_slot(&sampler, &mut rng, index, hues[index], neighbors, floor)
            }
        };
        filled.push(color);
    }

    Palette::new(filled)
}

/// Hue of the first locked color that has one.
fn locked_base_hue(slots: &[Option<Color>]) -> Option<f64> {
    slots
        .iter()
        .flatten()
        .map(|c| c.to_hsl())
        .find(|hsl| hsl.s >= MIN_SEED_SATURATION)
        .map(|hsl| hsl.h)
}

// ---------------------------------------------------------------------------
// Slot filling
// ---------------------------------------------------------------------------

/// Draws candidate colors for a slot.
struct Sampler {
    mode: HarmonyMode,
    count: usize,
    saturation: Band,
    lightness: Band,
}

impl Sampler {
    fn sample(&self, rng: &mut Xorshift32, index: usize, hue: f64) -> Color {
        let s = rng.range_f64(self.saturation.lo, self.saturation.hi);
        let l = if self.mode == HarmonyMode::Monochromatic && self.count > 1 {
            // One hue: spread lightness so neighbors separate.
            let t = index as f64 / (self.count - 1) as f64;
            let jitter = rng.range_f64(-MONO_LIGHTNESS_JITTER, MONO_LIGHTNESS_JITTER);
            (self.lightness.lerp(t) + jitter).clamp(self.lightness.lo, self.lightness.hi)
        } else {
            rng.range_f64(self.lightness.lo, self.lightness.hi)
        };
        Color::hsl(hue, s, l)
    }
}

/// The already-decided colors a slot must contrast with.
#[derive(Clone, Copy)]
struct Neighbors {
    left: Option<Color>,
    right: Option<Color>,
}

impl Neighbors {
    /// Weakest contrast against any present neighbor.
    fn min_contrast(self, color: Color) -> f64 {
        [self.left, self.right]
            .into_iter()
            .flatten()
            .map(|n| contrast_ratio(color, n))
            .fold(f64::INFINITY, f64::min)
    }
}

fn fill_slot(
    sampler: &Sampler,
    rng: &mut Xorshift32,
    index: usize,
    hue: f64,
    neighbors: Neighbors,
    floor: f64,
) -> Color {
    let first = sampler.sample(rng, index, hue);
    let mut best = (first, neighbors.min_contrast(first));
    if best.1 >= floor {
        return first;
    }

    for attempt in 1..MAX_ATTEMPTS_PER_SLOT {
        let candidate = sampler.sample(rng, index, hue);
        let score = neighbors.min_contrast(candidate);
        if score >= floor {
            trace!(index, attempt, score, "slot accepted after resampling");
            return candidate;
        }
        if score > best.1 {
            best = (candidate, score);
        }
    }

    if let Some(repaired) = repair(best.0, neighbors, floor, sampler.lightness) {
        debug!(index, from = %best.0, to = %repaired, "slot repaired along lightness");
        return repaired;
    }

    // Against a single neighbor, contrast peaks at one of the band edges.
    let hsl = best.0.to_hsl();
    for l in [sampler.lightness.lo, sampler.lightness.hi] {
        let edge = Color::from_hsl(hsl.with_lightness(l));
        let score = neighbors.min_contrast(edge);
        if score > best.1 {
            best = (edge, score);
        }
    }

    warn!(
        index,
        best = best.1,
        floor,
        "contrast floor unreachable within band, keeping best candidate"
    );
    best.0
}

/// Move `color`'s lightness within `band` until it clears `floor` against
/// its neighbors.
fn repair(color: Color, neighbors: Neighbors, floor: f64, band: Band) -> Option<Color> {
    let anchor = neighbors.left.or(neighbors.right)?;
    let repaired = ensure_contrast_in_band(color, anchor, floor, band)?;
    (neighbors.min_contrast(repaired) >= floor).then_some(repaired)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
