//! Harmony modes — hue layout on the color wheel.
//!
//! Each mode takes a base hue (0-360) and lays out one hue per palette
//! slot using a fixed angular relationship. The first slot always gets
//! the base hue itself.

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};
use crate::rng::Xorshift32;

/// Narrowest analogous spread (degrees either side of the base).
pub const ANALOGOUS_MIN_SPREAD: f64 = 30.0;
/// Widest analogous spread.
pub const ANALOGOUS_MAX_SPREAD: f64 = 60.0;
/// Offset of the split-complementary arms from the true complement.
pub const SPLIT_OFFSET: f64 = 30.0;

/// Rule for choosing related hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyMode {
    /// Pick one of the concrete modes at random on every call.
    #[default]
    Auto,
    /// Single hue; only saturation and lightness vary.
    Monochromatic,
    /// Neighboring hues within ±30–60° of the base.
    Analogous,
    /// Base and base + 180°.
    Complementary,
    /// Base and the two hues 30° either side of its complement.
    SplitComplementary,
    /// Three hues 120° apart.
    Triadic,
}

impl HarmonyMode {
    /// Modes `Auto` chooses between.
    pub const CONCRETE: [Self; 5] = [
        Self::Monochromatic,
        Self::Analogous,
        Self::Complementary,
        Self::SplitComplementary,
        Self::Triadic,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Triadic => "triadic",
        }
    }

    /// Parse a mode from its name (case-insensitive). `splitComplementary`
    /// and `split_complementary` are accepted as spellings of
    /// `split-complementary`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::UnknownName`] for anything else.
    pub fn from_name(name: &str) -> Result<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Self::all()
            .iter()
            .find(|m| m.name().replace('-', "") == key)
            .copied()
            .ok_or_else(|| PaletteError::UnknownName {
                kind: "harmony mode",
                name: name.to_owned(),
            })
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Auto,
            Self::Monochromatic,
            Self::Analogous,
            Self::Complementary,
            Self::SplitComplementary,
            Self::Triadic,
        ]
    }

    /// Replace `Auto` by a uniformly chosen concrete mode.
    pub(crate) fn resolve(self, rng: &mut Xorshift32) -> Self {
        match self {
            Self::Auto => *rng.pick(&Self::CONCRETE),
            other => other,
        }
    }

    /// The fixed anchor hues of this mode. The first is always `base`.
    ///
    /// Analogous has no fixed anchors (its spread is sampled), so it
    /// reports the base alone, as do `Monochromatic` and `Auto`.
    #[must_use]
    pub fn anchors(self, base: f64) -> Vec<f64> {
        match self {
            Self::Auto | Self::Monochromatic | Self::Analogous => vec![norm(base)],
            Self::Complementary => vec![norm(base), norm(base + 180.0)],
            Self::SplitComplementary => vec![
                norm(base),
                norm(base + 180.0 - SPLIT_OFFSET),
                norm(base + 180.0 + SPLIT_OFFSET),
            ],
            Self::Triadic => vec![norm(base), norm(base + 120.0), norm(base + 240.0)],
        }
    }

    /// Lay out `count` hues for this (concrete) mode.
    ///
    /// Anchors are assigned to contiguous runs of slots. Every slot in a run
    /// keeps the anchor hue exactly, so extra slots become tints and shades
    /// of it once the generator samples lightness.
    pub(crate) fn hues(self, base: f64, count: usize, rng: &mut Xorshift32) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }

        if self == Self::Analogous {
            let spread = rng.range_f64(ANALOGOUS_MIN_SPREAD, ANALOGOUS_MAX_SPREAD);
            if count == 1 {
                return vec![norm(base)];
            }
            // Base first, then the others fanned evenly across ±spread.
            let step = 2.0 * spread / (count - 1) as f64;
            let mut hues: Vec<f64> = (0..count)
                .map(|i| norm((i as f64).mul_add(step, base - spread)))
                .collect();
            hues[0] = norm(base);
            return hues;
        }

        let anchors = self.anchors(base);
        (0..count).map(|i| anchors[i * anchors.len() / count]).collect()
    }
}

impl std::fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for HarmonyMode {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Normalize a hue to [0, 360).
fn norm(h: f64) -> f64 {
    hf_color::space::normalize_hue(h)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
