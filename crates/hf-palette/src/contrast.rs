//! WCAG contrast scoring and readability repair.
//!
//! - Relative luminance and contrast ratio follow WCAG 2.1 exactly.
//! - Ratings use the inclusive thresholds 3 (AA large text), 4.5 (AA)
//!   and 7 (AAA).
//!
//! Scoring happens in sRGB relative-luminance space (the WCAG
//! definition); repair moves HSL lightness, which leaves hue and
//! saturation where the generator put them.

use std::fmt;

use hf_color::{Color, Hsl};
use serde::{Deserialize, Serialize};

use crate::mood::Band;

/// Minimum ratio for large text (AA).
pub const AA_LARGE_THRESHOLD: f64 = 3.0;
/// Minimum ratio for normal text (AA).
pub const AA_THRESHOLD: f64 = 4.5;
/// Minimum ratio for normal text (AAA).
pub const AAA_THRESHOLD: f64 = 7.0;

/// Compute the relative luminance of a color per WCAG 2.1.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_linear();
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG conformance level reached by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WcagRating {
    Fail,
    /// ≥ 3:1, enough for large text only.
    AaLarge,
    /// ≥ 4.5:1.
    Aa,
    /// ≥ 7:1.
    Aaa,
}

impl WcagRating {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::AaLarge => "AA Large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl fmt::Display for WcagRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate a contrast ratio. Thresholds are inclusive lower bounds.
#[must_use]
pub fn wcag_rating(ratio: f64) -> WcagRating {
    if ratio >= AAA_THRESHOLD {
        WcagRating::Aaa
    } else if ratio >= AA_THRESHOLD {
        WcagRating::Aa
    } else if ratio >= AA_LARGE_THRESHOLD {
        WcagRating::AaLarge
    } else {
        WcagRating::Fail
    }
}

/// Black or white, whichever reads better on `bg`.
#[must_use]
pub fn best_text_color(bg: Color) -> Color {
    if contrast_ratio(Color::WHITE, bg) >= contrast_ratio(Color::BLACK, bg) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// Adjust `fg`'s HSL lightness until it meets `min_ratio` contrast against
/// `bg`, keeping hue and saturation.
///
/// Tries the direction away from `bg` first (lighter when `fg` is already
/// the lighter of the two), then the other direction. Uses binary search
/// so the result stays as close to the original lightness as possible.
///
/// Returns `None` when no lightness in either direction reaches the ratio.
#[must_use]
pub fn ensure_contrast(fg: Color, bg: Color, min_ratio: f64) -> Option<Color> {
    ensure_contrast_in_band(fg, bg, min_ratio, Band::FULL)
}

/// [`ensure_contrast`] restricted to lightness within `band`.
///
/// Returns `None` when no lightness inside the band reaches the ratio,
/// leaving the caller to decide what to keep.
#[must_use]
pub fn ensure_contrast_in_band(fg: Color, bg: Color, min_ratio: f64, band: Band) -> Option<Color> {
    if contrast_ratio(fg, bg) >= min_ratio {
        return Some(fg);
    }

    let hsl = fg.to_hsl();
    let lighter_first = relative_luminance(fg) >= relative_luminance(bg);
    let directions = if lighter_first { [true, false] } else { [false, true] };

    directions
        .into_iter()
        .find_map(|lighten| search_lightness(hsl, bg, min_ratio, lighten, band))
}

/// Binary search on lightness between `hsl.l` and the band edge in one
/// direction.
fn search_lightness(
    hsl: Hsl,
    bg: Color,
    min_ratio: f64,
    lighten: bool,
    band: Band,
) -> Option<Color> {
    let edge = if lighten { band.hi } else { band.lo };
    let extreme = Color::from_hsl(hsl.with_lightness(edge));
    if contrast_ratio(extreme, bg) < min_ratio {
        return None;
    }

    // `near` fails the ratio, `far` meets it.
    let mut near = hsl.l.clamp(band.lo, band.hi);
    let mut far = edge;
    let mut best = extreme;

    for _ in 0..24 {
        let mid = (near + far) * 0.5;
        let candidate = Color::from_hsl(hsl.with_lightness(mid));
        if contrast_ratio(candidate, bg) >= min_ratio {
            best = candidate;
            far = mid;
        } else {
            near = mid;
        }
    }

    Some(best)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
