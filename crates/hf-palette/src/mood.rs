//! Moods: saturation and lightness bands for sampling.
//!
//! The band edges are hand-tuned, not derived from any standard. They are
//! kept together in one table so they can be tuned without touching the
//! generator.

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};

/// Lightness ceiling applied when `dark_mode_friendly` is set.
pub const DARK_MODE_MAX_LIGHTNESS: f64 = 45.0;

/// Minimum width kept when a band is squeezed by a ceiling.
const MIN_BAND_WIDTH: f64 = 10.0;

/// An inclusive range of HSL percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub lo: f64,
    pub hi: f64,
}

impl Band {
    #[must_use]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// The whole 0–100% range.
    pub const FULL: Self = Self::new(0.0, 100.0);

    /// Value at fraction `t` (0–1) across the band.
    #[must_use]
    pub fn lerp(self, t: f64) -> f64 {
        (self.hi - self.lo).mul_add(t.clamp(0.0, 1.0), self.lo)
    }

    /// Lower the upper edge to `max`, keeping at least a minimal width.
    #[must_use]
    pub fn capped(self, max: f64) -> Self {
        let hi = self.hi.min(max);
        let lo = self.lo.min(hi - MIN_BAND_WIDTH).max(0.0);
        Self { lo, hi }
    }
}

/// Overall character of a generated palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    /// Broad bands; anything readable.
    #[default]
    Any,
    Vibrant,
    Pastel,
    Muted,
    Soft,
    Dark,
    Light,
    Earthy,
    Neon,
}

impl Mood {
    /// Saturation band (percent).
    #[must_use]
    pub const fn saturation(self) -> Band {
        match self {
            Self::Any => Band::new(35.0, 90.0),
            Self::Vibrant => Band::new(75.0, 100.0),
            Self::Pastel => Band::new(40.0, 75.0),
            Self::Muted => Band::new(15.0, 40.0),
            Self::Soft => Band::new(25.0, 55.0),
            Self::Dark => Band::new(40.0, 80.0),
            Self::Light => Band::new(30.0, 70.0),
            Self::Earthy => Band::new(25.0, 55.0),
            Self::Neon => Band::new(95.0, 100.0),
        }
    }

    /// Lightness band (percent).
    #[must_use]
    pub const fn lightness(self) -> Band {
        match self {
            Self::Any => Band::new(25.0, 80.0),
            Self::Vibrant => Band::new(45.0, 60.0),
            Self::Pastel => Band::new(78.0, 90.0),
            Self::Muted => Band::new(35.0, 65.0),
            Self::Soft => Band::new(60.0, 80.0),
            Self::Dark => Band::new(12.0, 35.0),
            Self::Light => Band::new(70.0, 92.0),
            Self::Earthy => Band::new(25.0, 55.0),
            Self::Neon => Band::new(50.0, 60.0),
        }
    }

    /// Lightness band after applying the dark-mode ceiling if requested.
    #[must_use]
    pub fn lightness_for(self, dark_mode_friendly: bool) -> Band {
        let band = self.lightness();
        if dark_mode_friendly {
            band.capped(DARK_MODE_MAX_LIGHTNESS)
        } else {
            band
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Vibrant => "vibrant",
            Self::Pastel => "pastel",
            Self::Muted => "muted",
            Self::Soft => "soft",
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Earthy => "earthy",
            Self::Neon => "neon",
        }
    }

    /// Parse a mood from its name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::UnknownName`] if the name is not a mood.
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|m| m.name() == lower)
            .copied()
            .ok_or_else(|| PaletteError::UnknownName {
                kind: "mood",
                name: name.to_owned(),
            })
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Any,
            Self::Vibrant,
            Self::Pastel,
            Self::Muted,
            Self::Soft,
            Self::Dark,
            Self::Light,
            Self::Earthy,
            Self::Neon,
        ]
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Mood {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
