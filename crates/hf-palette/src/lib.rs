//! # hf-palette — palette engine for hueforge
//!
//! Generates, extends and checks color palettes. One request (harmony
//! mode, mood, contrast floor, seed) produces an ordered palette of 2–8
//! colors whose neighbors stay distinguishable.
//!
//! # Architecture
//!
//! ```text
//! GenerationConstraints + count + locked slots
//!     │
//!     ▼
//! harmony.rs:   pick base hue, lay out one hue per slot
//!     │
//!     ▼
//! mood.rs:      saturation / lightness bands to sample from
//!     │
//!     ▼
//! generator.rs: sample each free slot, reject on weak neighbor
//!               contrast, repair or fall back to best candidate
//!     │
//!     ▼
//! palette.rs:   Palette (2–8 colors), URL path codec, bridges
//! ```
//!
//! Independent tools that operate on any palette or color:
//!
//! - `shades.rs`:   lightness ramps and bridge colors
//! - `contrast.rs`: WCAG luminance, contrast ratio and rating
//! - `vision.rs`:   color-vision deficiency simulation
//! - `score.rs`:    offline harmony/accessibility heuristic
//! - `export.rs`:   CSS, SCSS, Tailwind and JSON output
//!
//! Every function here is pure over its inputs; nothing holds global
//! state, so all of it is safe to call from any thread.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Mathematical code uses small integer-to-float casts (loop indices, counts).
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/saturation variable names are inherently similar.
#![allow(clippy::similar_names)]
// f64→f32 and usize truncation is intentional in PRNG helpers.
#![allow(clippy::cast_possible_truncation)]

pub mod config;
pub mod constraints;
pub mod contrast;
pub mod error;
pub mod export;
pub mod generator;
pub mod harmony;
pub mod mood;
pub mod palette;
pub mod score;
pub mod shades;
pub mod vision;

mod rng;

pub use constraints::GenerationConstraints;
pub use contrast::{WcagRating, contrast_ratio, relative_luminance, wcag_rating};
pub use error::{PaletteError, Result};
pub use generator::{generate, generate_locked};
pub use harmony::HarmonyMode;
pub use mood::Mood;
pub use palette::Palette;
pub use shades::{generate_bridge_color, generate_shades};
pub use vision::{ColorBlindnessMode, simulate};
