//! Offline palette-quality heuristic.
//!
//! Blends a hue-spread "harmony" score with how readable the palette's
//! best color is on plain white or black. The tier edges and weights are
//! hand-tuned approximations, not color science. This is for ranking
//! palettes in bulk; interactive generation never consults it.

use hf_color::Color;
use hf_color::space::hue_diff;
use serde::Serialize;

use crate::contrast::contrast_ratio;
use crate::palette::Palette;

/// Spread up to this many degrees reads as one family (monochromatic).
pub const TIGHT_SPREAD: f64 = 30.0;
/// Spread up to this many degrees reads as analogous.
pub const ANALOGOUS_SPREAD: f64 = 60.0;
/// Spread up to this many degrees is the unresolved middle ground.
pub const CLASH_SPREAD: f64 = 150.0;

pub const TIGHT_SCORE: f64 = 95.0;
pub const ANALOGOUS_SCORE: f64 = 90.0;
pub const CLASH_SCORE: f64 = 70.0;
/// Spreads past [`CLASH_SPREAD`] approach the complement.
pub const COMPLEMENT_SCORE: f64 = 85.0;

pub const HARMONY_WEIGHT: f64 = 0.5;
pub const ACCESSIBILITY_WEIGHT: f64 = 0.4;
/// Flat bonus every palette receives.
pub const BASE_BONUS: f64 = 10.0;

/// Colors below this HSL saturation are ignored for hue spread.
const MIN_HUE_SATURATION: f64 = 5.0;

/// Component and overall scores, each out of 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaletteScore {
    pub harmony: f64,
    pub accessibility: f64,
    pub total: f64,
}

/// Largest shorter-arc hue distance between any two chromatic colors.
#[must_use]
pub fn max_hue_spread(colors: &[Color]) -> f64 {
    let hues: Vec<f64> = colors
        .iter()
        .map(|c| c.to_hsl())
        .filter(|hsl| hsl.s >= MIN_HUE_SATURATION)
        .map(|hsl| hsl.h)
        .collect();

    let mut max: f64 = 0.0;
    for (i, &a) in hues.iter().enumerate() {
        for &b in &hues[i + 1..] {
            max = max.max(hue_diff(a, b));
        }
    }
    max
}

/// Harmony tier for a hue spread.
#[must_use]
pub fn harmony_score(spread: f64) -> f64 {
    if spread <= TIGHT_SPREAD {
        TIGHT_SCORE
    } else if spread <= ANALOGOUS_SPREAD {
        ANALOGOUS_SCORE
    } else if spread <= CLASH_SPREAD {
        CLASH_SCORE
    } else {
        COMPLEMENT_SCORE
    }
}

/// Best contrast any single color reaches against white or black,
/// scaled so 21:1 is 100.
#[must_use]
pub fn accessibility_score(colors: &[Color]) -> f64 {
    let best = colors
        .iter()
        .map(|&c| contrast_ratio(c, Color::WHITE).max(contrast_ratio(c, Color::BLACK)))
        .fold(1.0, f64::max);
    best / 21.0 * 100.0
}

/// Score a palette.
#[must_use]
pub fn score_palette(palette: &Palette) -> PaletteScore {
    let harmony = harmony_score(max_hue_spread(palette.colors()));
    let accessibility = accessibility_score(palette.colors());
    let total = ACCESSIBILITY_WEIGHT
        .mul_add(accessibility, HARMONY_WEIGHT.mul_add(harmony, BASE_BONUS))
        .min(100.0);
    PaletteScore {
        harmony,
        accessibility,
        total,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
