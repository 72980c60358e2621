//! Color-vision deficiency simulation.
//!
//! Each mode is a fixed linear transform applied in linear-light sRGB.
//! The dichromat matrices are Machado, Oliveira & Fernandes (2009) at
//! full severity. They are approximations of what a dichromat sees, good
//! enough to catch palettes whose colors collapse together, not a
//! clinical model.

use std::fmt;

use hf_color::Color;
use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};
use crate::palette::Palette;

type Matrix = [[f64; 3]; 3];

const PROTANOPIA: Matrix = [
    [0.152_286, 1.052_583, -0.204_868],
    [0.114_503, 0.786_281, 0.099_216],
    [-0.003_882, -0.048_116, 1.051_998],
];

const DEUTERANOPIA: Matrix = [
    [0.367_322, 0.860_646, -0.227_968],
    [0.280_085, 0.672_501, 0.047_413],
    [-0.011_820, 0.042_940, 0.968_881],
];

const TRITANOPIA: Matrix = [
    [1.255_528, -0.076_749, -0.178_779],
    [-0.078_411, 0.930_809, 0.147_602],
    [0.004_733, 0.691_367, 0.303_900],
];

/// Achromatopsia collapses every channel to relative luminance.
const ACHROMATOPSIA: Matrix = [
    [0.2126, 0.7152, 0.0722],
    [0.2126, 0.7152, 0.0722],
    [0.2126, 0.7152, 0.0722],
];

/// Kind of color vision to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorBlindnessMode {
    #[default]
    Normal,
    /// Red-blind.
    Protanopia,
    /// Green-blind.
    Deuteranopia,
    /// Blue-blind.
    Tritanopia,
    /// No color perception.
    Achromatopsia,
}

impl ColorBlindnessMode {
    /// The linear-RGB transform for this mode, `None` for normal vision.
    #[must_use]
    pub const fn matrix(self) -> Option<&'static Matrix> {
        match self {
            Self::Normal => None,
            Self::Protanopia => Some(&PROTANOPIA),
            Self::Deuteranopia => Some(&DEUTERANOPIA),
            Self::Tritanopia => Some(&TRITANOPIA),
            Self::Achromatopsia => Some(&ACHROMATOPSIA),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
        }
    }

    /// # Errors
    ///
    /// Returns [`PaletteError::UnknownName`] for an unrecognized name.
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|m| m.name() == lower)
            .copied()
            .ok_or_else(|| PaletteError::UnknownName {
                kind: "vision mode",
                name: name.to_owned(),
            })
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Normal,
            Self::Protanopia,
            Self::Deuteranopia,
            Self::Tritanopia,
            Self::Achromatopsia,
        ]
    }
}

impl fmt::Display for ColorBlindnessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ColorBlindnessMode {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// How `color` appears under `mode`.
///
/// Normal vision returns the input unchanged.
#[must_use]
pub fn simulate(color: Color, mode: ColorBlindnessMode) -> Color {
    let Some(m) = mode.matrix() else {
        return color;
    };
    let (r, g, b) = color.to_linear();
    let row = |i: usize| m[i][2].mul_add(b, m[i][0].mul_add(r, m[i][1] * g));
    Color::linear(row(0), row(1), row(2))
}

/// Simulate every color of a palette, keeping order.
#[must_use]
pub fn simulate_palette(palette: &Palette, mode: ColorBlindnessMode) -> Palette {
    palette.map(|c| simulate(c, mode))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
