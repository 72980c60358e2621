// SPDX-License-Identifier: MIT
//
// hf-color — color space engine for hueforge.
//
// A color is stored the way palettes are exchanged: an 8-bit sRGB triple
// that prints as `#RRGGBB`. Every other encoding is derived on demand:
//
//   HEX ↔ RGB ↔ HSL
//           ↕
//       Linear sRGB ↔ Oklab ↔ OKLCH
//
// HSL is what palette generation samples in (hue wheel + percentage
// bands). OKLCH is the perceptual view used for distances and
// gamut-aware mixing. Linear sRGB is where luminance and color-vision
// transforms happen.

// Single-character variable names (r, g, b, h, s, l, c) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod color;
pub mod error;
pub mod hex;
pub mod hsl;
pub mod oklch;
pub mod space;

pub use color::Color;
pub use error::{ColorError, Result};
pub use hsl::Hsl;
pub use oklch::Oklch;
