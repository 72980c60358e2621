//! Palettes and their URL path encoding.
//!
//! A palette is an ordered run of 2–8 colors. Order matters: neighbors
//! are what contrast checks and bridge insertion look at. The same
//! palette travels between pages as a hyphen-joined path segment:
//!
//! ```text
//! /E63946-F1FAEE-A8DADC-457B9D-1D3557
//! ```

use std::fmt;

use hf_color::{Color, ColorError};
use serde::{Deserialize, Serialize};

use crate::contrast::contrast_ratio;
use crate::error::{PaletteError, Result};
use crate::shades::generate_bridge_color;

/// Fewest colors a palette may hold.
pub const MIN_COLORS: usize = 2;
/// Most colors a palette may hold.
pub const MAX_COLORS: usize = 8;

/// An ordered sequence of 2–8 colors. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette, checking the length.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidLength`] unless 2 ≤ len ≤ 8.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if !(MIN_COLORS..=MAX_COLORS).contains(&colors.len()) {
            return Err(PaletteError::InvalidLength { len: colors.len() });
        }
        Ok(Self { colors })
    }

    /// Decode a URL path segment such as `/e63946-F1FAEE-a8dadc`.
    ///
    /// Case-insensitive; a leading `/` and a `#` on individual codes are
    /// tolerated. Each code must be exactly six hex digits: the `#F00`
    /// shorthand and padded codes are rejected.
    ///
    /// # Errors
    ///
    /// Fails on an invalid hex code or a count outside 2–8.
    pub fn from_path(path: &str) -> Result<Self> {
        let path = path.trim().trim_matches('/');
        let colors = path
            .split('-')
            .map(parse_path_code)
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors)
    }

    /// Encode as a path segment: uppercase codes joined by `-`, no slash.
    #[must_use]
    pub fn to_path(&self) -> String {
        self.colors
            .iter()
            .map(|c| c.hex_digits())
            .collect::<Vec<_>>()
            .join("-")
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette; present for API symmetry
    /// with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    /// Contrast ratio of each neighboring pair, left to right.
    #[must_use]
    pub fn adjacent_contrasts(&self) -> Vec<f64> {
        self.colors
            .windows(2)
            .map(|w| contrast_ratio(w[0], w[1]))
            .collect()
    }

    /// Insert a bridge color between `index` and `index + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidLength`] if the palette is already
    /// full, and [`PaletteError::InvalidConstraint`] if `index` has no
    /// right-hand neighbor.
    pub fn insert_bridge(&mut self, index: usize) -> Result<Color> {
        if self.colors.len() >= MAX_COLORS {
            return Err(PaletteError::InvalidLength {
                len: self.colors.len() + 1,
            });
        }
        if index + 1 >= self.colors.len() {
            return Err(PaletteError::InvalidConstraint {
                field: "bridge index",
                reason: format!("{index} has no right-hand neighbor"),
            });
        }
        let bridge = generate_bridge_color(self.colors[index], self.colors[index + 1]);
        self.colors.insert(index + 1, bridge);
        Ok(bridge)
    }

    /// Apply `f` to every color, keeping order.
    #[must_use]
    pub fn map(&self, f: impl Fn(Color) -> Color) -> Self {
        Self {
            colors: self.colors.iter().map(|&c| f(c)).collect(),
        }
    }
}

fn parse_path_code(code: &str) -> Result<Color> {
    let digits = code.strip_prefix('#').unwrap_or(code);
    if digits.len() != 6 {
        return Err(ColorError::InvalidLength {
            input: code.to_owned(),
            len: digits.len(),
        }
        .into());
    }
    Ok(Color::hex(digits)?)
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = PaletteError;

    fn try_from(colors: Vec<Color>) -> Result<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

impl std::str::FromStr for Palette {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_path(s)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
