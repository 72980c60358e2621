// SPDX-License-Identifier: MIT

//! HSL view of a color: the space palette generation samples in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::space::normalize_hue;

/// Hue / saturation / lightness.
///
/// `h` is in degrees [0, 360); `s` and `l` are percentages [0, 100].
/// Values are kept unrounded so `Color → Hsl → Color` is lossless.
/// Deserialization wraps and clamps through [`Hsl::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHsl")]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Build an HSL value, wrapping hue into [0, 360) and clamping
    /// saturation and lightness to [0, 100].
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Components rounded to whole degrees and percentages, for display.
    #[must_use]
    pub fn rounded(self) -> (i32, i32, i32) {
        #[allow(clippy::cast_possible_truncation)]
        let r = |v: f64| v.round() as i32;
        // 359.6 rounds to 360, which reads as 0.
        (r(self.h) % 360, r(self.s), r(self.l))
    }
}

#[derive(Deserialize)]
struct RawHsl {
    h: f64,
    s: f64,
    l: f64,
}

impl From<RawHsl> for Hsl {
    fn from(raw: RawHsl) -> Self {
        Self::new(raw.h, raw.s, raw.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, s, l) = self.rounded();
        write!(f, "hsl({h}, {s}%, {l}%)")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wraps_and_clamps() {
        let hsl = Hsl::new(-10.0, 120.0, -5.0);
        assert!((hsl.h - 350.0).abs() < 1e-9);
        assert!((hsl.s - 100.0).abs() < 1e-9);
        assert!(hsl.l.abs() < 1e-9);
    }

    #[test]
    fn with_lightness_clamps() {
        let hsl = Hsl::new(120.0, 50.0, 50.0).with_lightness(140.0);
        assert!((hsl.l - 100.0).abs() < 1e-9);
        assert!((hsl.h - 120.0).abs() < 1e-9);
    }

    #[test]
    fn deserialize_wraps_and_clamps() {
        let hsl: Hsl = serde_json::from_str(r#"{"h": 420.0, "s": -5.0, "l": 150.0}"#).unwrap();
        assert_eq!(hsl, Hsl::new(60.0, 0.0, 100.0));
    }

    #[test]
    fn rounded_hue_never_360() {
        assert_eq!(Hsl::new(359.7, 10.0, 10.0).rounded(), (0, 10, 10));
    }

    #[test]
    fn display_css_form() {
        assert_eq!(Hsl::new(217.4, 91.2, 59.8).to_string(), "hsl(217, 91%, 60%)");
    }
}
