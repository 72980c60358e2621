// SPDX-License-Identifier: MIT
//
// The `Color` value type.
//
// Palettes are exchanged as hex codes, so a color is stored as the 8-bit
// sRGB triple those codes denote. Two colors with equal channels are the
// same color. HSL, OKLCH and linear-light views are computed on demand
// and converted back through rounding + clamping, never by failing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};
use crate::hex::{format_hex, parse_hex};
use crate::hsl::Hsl;
use crate::oklch::Oklch;
use crate::space::{
    hsl_to_srgb, linear_to_srgb, oklch_to_srgb, srgb_to_hsl, srgb_to_linear, srgb_to_oklch, to_u8,
};

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8 bits per channel.
///
/// # Examples
///
/// ```
/// use hf_color::Color;
///
/// let red = Color::hex("#E63946").unwrap();
/// assert_eq!(red.to_hex(), "#E63946");
///
/// let hsl = red.to_hsl();
/// assert_eq!(Color::from_hsl(hsl), red);
///
/// // Hue wraps, so -10° and 350° name the same color.
/// assert_eq!(Color::hsl(-10.0, 80.0, 50.0), Color::hsl(350.0, 80.0, 50.0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color (`#RRGGBB` or `#RGB`, `#` optional, any case).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if the string is not a valid hex color.
    pub fn hex(s: &str) -> Result<Self> {
        let (r, g, b) = parse_hex(s)?;
        Ok(Self { r, g, b })
    }

    /// Create a color from sRGB floats (0.0–1.0). Out-of-range values are
    /// clamped and each channel is rounded to the nearest integer.
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
        }
    }

    /// Create a color from linear-light sRGB floats (0.0–1.0).
    #[must_use]
    pub fn linear(r: f64, g: f64, b: f64) -> Self {
        Self::srgb(
            linear_to_srgb(r.clamp(0.0, 1.0)),
            linear_to_srgb(g.clamp(0.0, 1.0)),
            linear_to_srgb(b.clamp(0.0, 1.0)),
        )
    }

    /// Create a color from HSL components.
    ///
    /// Hue is taken mod 360 (negative values wrap); saturation and
    /// lightness are percentages clamped to [0, 100].
    #[must_use]
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        let (r, g, b) = hsl_to_srgb(h, s / 100.0, l / 100.0);
        Self::srgb(r, g, b)
    }

    /// Create a color from an [`Hsl`] value.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::hsl(hsl.h, hsl.s, hsl.l)
    }

    /// Create a color from an [`Oklch`] value.
    ///
    /// Out-of-gamut values are brought into sRGB by reducing chroma first,
    /// so the hue and lightness survive.
    #[must_use]
    pub fn from_oklch(oklch: Oklch) -> Self {
        let Oklch { l, c, h } = oklch.to_gamut();
        let (r, g, b) = oklch_to_srgb(l, c, h);
        Self::srgb(r, g, b)
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Channels as sRGB floats (0.0–1.0).
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Channels as linear-light floats (gamma removed).
    #[must_use]
    pub fn to_linear(self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_srgb();
        (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_srgb();
        let (h, s, l) = srgb_to_hsl(r, g, b);
        Hsl::new(h, s * 100.0, l * 100.0)
    }

    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        let (r, g, b) = self.to_srgb();
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Oklch::new(l, c, h)
    }

    /// `#RRGGBB`, uppercase.
    #[must_use]
    pub fn to_hex(self) -> String {
        format_hex(self.r, self.g, self.b)
    }

    /// `RRGGBB` without the leading `#`, as used in palette URLs.
    #[must_use]
    pub fn hex_digits(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Largest per-channel difference to another color.
    #[must_use]
    pub const fn channel_distance(self, other: Self) -> u8 {
        let dr = self.r.abs_diff(other.r);
        let dg = self.g.abs_diff(other.g);
        let db = self.b.abs_diff(other.b);
        let m = if dr > dg { dr } else { dg };
        if m > db { m } else { db }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self> {
        Self::hex(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ─── Hex ─────────────────────────────────────────────────────────

    #[test]
    fn hex_roundtrip_is_uppercase() {
        let c = Color::hex("#e63946").unwrap();
        assert_eq!(c.to_hex(), "#E63946");
        assert_eq!(c.hex_digits(), "E63946");
    }

    #[test]
    fn hex_short_form_expands() {
        assert_eq!(Color::hex("#fff").unwrap(), Color::WHITE);
    }

    #[test]
    fn hex_invalid_is_error() {
        assert!(Color::hex("nope").is_err());
        assert!("#1234".parse::<Color>().is_err());
    }

    // ─── HSL ─────────────────────────────────────────────────────────

    #[test]
    fn tailwind_blue_to_hsl() {
        // #2563EB is hsl(221.2, 83.2%, 53.3%).
        let hsl = Color::hex("#2563EB").unwrap().to_hsl();
        assert!(approx_eq(hsl.h, 221.2, 0.1), "h = {}", hsl.h);
        assert!(approx_eq(hsl.s, 83.2, 0.1), "s = {}", hsl.s);
        assert!(approx_eq(hsl.l, 53.3, 0.1), "l = {}", hsl.l);
    }

    #[test]
    fn hsl_roundtrip_exact() {
        for hex in ["#E63946", "#F1FAEE", "#A8DADC", "#457B9D", "#1D3557", "#808080"] {
            let c = Color::hex(hex).unwrap();
            assert_eq!(Color::from_hsl(c.to_hsl()), c, "{hex}");
        }
    }

    #[test]
    fn hsl_hue_wraps() {
        assert_eq!(Color::hsl(-10.0, 70.0, 40.0), Color::hsl(350.0, 70.0, 40.0));
        assert_eq!(Color::hsl(480.0, 70.0, 40.0), Color::hsl(120.0, 70.0, 40.0));
    }

    #[test]
    fn hsl_out_of_range_clamps() {
        assert_eq!(Color::hsl(0.0, 50.0, 150.0), Color::WHITE);
        assert_eq!(Color::hsl(0.0, 50.0, -20.0), Color::BLACK);
        assert_eq!(Color::hsl(0.0, 300.0, 50.0), Color::hsl(0.0, 100.0, 50.0));
    }

    // ─── OKLCH ───────────────────────────────────────────────────────

    #[test]
    fn black_is_zero_lightness() {
        let ok = Color::BLACK.to_oklch();
        assert!(approx_eq(ok.l, 0.0, 1e-6));
    }

    #[test]
    fn white_is_full_lightness() {
        let ok = Color::WHITE.to_oklch();
        assert!(approx_eq(ok.l, 1.0, 1e-4));
        assert!(ok.c < 1e-4);
    }

    #[test]
    fn oklch_roundtrip() {
        for hex in ["#E63946", "#2563EB", "#10B981", "#F59E0B"] {
            let c = Color::hex(hex).unwrap();
            let back = Color::from_oklch(c.to_oklch());
            assert!(back.channel_distance(c) <= 1, "{hex} → {back}");
        }
    }

    #[test]
    fn from_oklch_out_of_gamut_still_valid() {
        let c = Color::from_oklch(Oklch::new(0.7, 0.4, 150.0));
        // Mapped into gamut: a green, not clamped garbage.
        assert!(c.g > c.r && c.g > c.b, "{c}");
    }

    // ─── Linear ──────────────────────────────────────────────────────

    #[test]
    fn linear_roundtrip() {
        let c = Color::rgb(12, 130, 250);
        let (r, g, b) = c.to_linear();
        assert_eq!(Color::linear(r, g, b), c);
    }

    // ─── Distance ────────────────────────────────────────────────────

    #[test]
    fn channel_distance_is_max_channel_delta() {
        assert_eq!(Color::rgb(10, 20, 30).channel_distance(Color::rgb(12, 15, 31)), 5);
    }
}
