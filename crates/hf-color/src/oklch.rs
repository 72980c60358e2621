// SPDX-License-Identifier: MIT

//! OKLCH: the perceptual view of a color.
//!
//! OKLCH is the cylindrical form of Björn Ottosson's Oklab. Equal numeric
//! steps look like equal visual steps. Colors built here are brought into
//! sRGB by trimming chroma, never by shifting hue or lightness.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::space::{normalize_hue, oklch_to_srgb};

/// A color in OKLCH space.
///
/// Deserialized values go through [`Oklch::new`], so they are clamped and
/// wrapped like constructed ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawOklch")]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,

    /// Chroma (colorfulness): 0.0 (gray) to ~0.37 (most vivid).
    /// Unbounded in theory, but the sRGB gamut limits practical values.
    pub c: f64,

    /// Hue angle in degrees: 0.0 to 360.0.
    pub h: f64,
}

impl Oklch {
    /// Create an OKLCH value. Lightness is clamped to [0, 1], chroma to
    /// >= 0, and hue is normalized.
    #[must_use]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            c: c.max(0.0),
            h: normalize_hue(h),
        }
    }

    /// Whether this color is within the sRGB gamut.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        const EPS: f64 = 1e-7;
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        let ok = |v: f64| (-EPS..=1.0 + EPS).contains(&v);
        ok(r) && ok(g) && ok(b)
    }

    /// Reduce chroma until this color fits within the sRGB gamut.
    ///
    /// Binary search for the maximum in-gamut chroma, keeping hue and
    /// lightness.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }

        let mut lo = 0.0;
        let mut hi = self.c;

        for _ in 0..24 {
            let mid = (lo + hi) * 0.5;
            let trial = Self { c: mid, ..self };
            if trial.in_srgb_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self { c: lo, ..self }
    }
}

#[derive(Deserialize)]
struct RawOklch {
    l: f64,
    c: f64,
    h: f64,
}

impl From<RawOklch> for Oklch {
    fn from(raw: RawOklch) -> Self {
        Self::new(raw.l, raw.c, raw.h)
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({:.3} {:.3} {:.1})", self.l, self.c, self.h)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
