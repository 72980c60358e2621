//! Generation constraints: the configuration record for one request.

use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};
use crate::harmony::HarmonyMode;
use crate::mood::Mood;

/// Lowest meaningful contrast floor (no constraint).
pub const MIN_CONTRAST_FLOOR: f64 = 1.0;
/// Highest accepted contrast floor between neighbors (WCAG AA text).
pub const MAX_CONTRAST_FLOOR: f64 = 4.5;

/// How a palette should be generated.
///
/// Every field has an explicit default, so a TOML table may name only the
/// fields it cares about:
///
/// ```toml
/// harmony-mode = "triadic"
/// mood = "pastel"
/// min-adjacent-contrast = 1.5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GenerationConstraints {
    /// Hue layout rule.
    pub harmony_mode: HarmonyMode,
    /// Saturation/lightness bands to sample from.
    pub mood: Mood,
    /// WCAG-style contrast ratio floor between neighboring colors,
    /// in [1.0, 4.5].
    pub min_adjacent_contrast: f64,
    /// Keep lightness low enough for dark interfaces.
    pub dark_mode_friendly: bool,
    /// Seed hue in degrees. When absent, the first chromatic locked color
    /// supplies it, or it is drawn at random.
    pub base_hue: Option<f64>,
    /// PRNG seed. When absent, one is derived from the clock.
    pub seed: Option<u32>,
}

impl Default for GenerationConstraints {
    fn default() -> Self {
        Self {
            harmony_mode: HarmonyMode::Auto,
            mood: Mood::Any,
            min_adjacent_contrast: MIN_CONTRAST_FLOOR,
            dark_mode_friendly: false,
            base_hue: None,
            seed: None,
        }
    }
}

impl GenerationConstraints {
    #[must_use]
    pub const fn with_mode(mut self, mode: HarmonyMode) -> Self {
        self.harmony_mode = mode;
        self
    }

    #[must_use]
    pub const fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    #[must_use]
    pub const fn with_min_contrast(mut self, ratio: f64) -> Self {
        self.min_adjacent_contrast = ratio;
        self
    }

    #[must_use]
    pub const fn with_dark_mode(mut self, on: bool) -> Self {
        self.dark_mode_friendly = on;
        self
    }

    #[must_use]
    pub const fn with_base_hue(mut self, hue: f64) -> Self {
        self.base_hue = Some(hue);
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every field against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidConstraint`] naming the first
    /// offending field.
    pub fn validate(&self) -> Result<()> {
        let ratio = self.min_adjacent_contrast;
        if !(MIN_CONTRAST_FLOOR..=MAX_CONTRAST_FLOOR).contains(&ratio) {
            return Err(PaletteError::InvalidConstraint {
                field: "min-adjacent-contrast",
                reason: format!(
                    "{ratio} is outside [{MIN_CONTRAST_FLOOR}, {MAX_CONTRAST_FLOOR}]"
                ),
            });
        }
        if let Some(hue) = self.base_hue {
            if !hue.is_finite() {
                return Err(PaletteError::InvalidConstraint {
                    field: "base-hue",
                    reason: format!("{hue} is not a finite angle"),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_valid() {
        assert!(GenerationConstraints::default().validate().is_ok());
    }

    #[test]
    fn builder_sets_fields() {
        let c = GenerationConstraints::default()
            .with_mode(HarmonyMode::Triadic)
            .with_mood(Mood::Pastel)
            .with_min_contrast(2.0)
            .with_dark_mode(true)
            .with_base_hue(200.0)
            .with_seed(9);
        assert_eq!(
            c,
            GenerationConstraints {
                harmony_mode: HarmonyMode::Triadic,
                mood: Mood::Pastel,
                min_adjacent_contrast: 2.0,
                dark_mode_friendly: true,
                base_hue: Some(200.0),
                seed: Some(9),
            }
        );
    }

    #[test]
    fn contrast_floor_bounds() {
        let ok = GenerationConstraints::default().with_min_contrast(4.5);
        assert!(ok.validate().is_ok());

        for bad in [0.5, 4.6, f64::NAN] {
            let err = GenerationConstraints::default().with_min_contrast(bad).validate();
            assert!(
                matches!(err, Err(PaletteError::InvalidConstraint { field: "min-adjacent-contrast", .. })),
                "{bad} accepted"
            );
        }
    }

    #[test]
    fn non_finite_base_hue_rejected() {
        let c = GenerationConstraints::default().with_base_hue(f64::INFINITY);
        assert!(c.validate().is_err());
    }

    #[test]
    fn negative_base_hue_allowed() {
        // Wraps like any other hue.
        assert!(GenerationConstraints::default().with_base_hue(-30.0).validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let c: GenerationConstraints = toml::from_str(
            r#"
            harmony-mode = "split-complementary"
            mood = "muted"
            "#,
        )
        .unwrap();
        assert_eq!(c.harmony_mode, HarmonyMode::SplitComplementary);
        assert_eq!(c.mood, Mood::Muted);
        assert!((c.min_adjacent_contrast - 1.0).abs() < f64::EPSILON);
        assert_eq!(c.base_hue, None);
    }
}
