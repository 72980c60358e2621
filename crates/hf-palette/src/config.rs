//! User configuration.
//!
//! Read from `config.toml` in the platform config directory (for example
//! `~/.config/hueforge/config.toml` on Linux). A missing file means
//! defaults; any field may be left out.
//!
//! ```toml
//! [generation]
//! count = 6
//! harmony-mode = "analogous"
//! mood = "earthy"
//! min-adjacent-contrast = 1.5
//!
//! [export]
//! format = "scss"
//! prefix = "brand"
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constraints::GenerationConstraints;
use crate::error::{PaletteError, Result};
use crate::export::{ExportFormat, ExportOptions};
use crate::palette::{MAX_COLORS, MIN_COLORS};

/// Palette size used when neither the command line nor the config says.
pub const DEFAULT_COUNT: usize = 5;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generation: GenerationConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GenerationConfig {
    pub count: usize,
    #[serde(flatten)]
    pub constraints: GenerationConstraints,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            constraints: GenerationConstraints::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExportConfig {
    pub format: ExportFormat,
    #[serde(flatten)]
    pub options: ExportOptions,
}

impl Config {
    /// Path of the user config file, if the platform has a config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "hueforge").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load the user config, falling back to defaults when there is no
    /// config file.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read, parsed or validated.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a specific config file.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Io`] if the file cannot be read and
    /// [`PaletteError::Config`] if it is not valid TOML for this schema.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::parse(&text)
            .map_err(|e| PaletteError::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate config text.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Config`] on malformed TOML, or the
    /// validation error for out-of-range values.
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| PaletteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidLength`] for a count outside 2–8, or
    /// the constraints' own validation error.
    pub fn validate(&self) -> Result<()> {
        let count = self.generation.count;
        if !(MIN_COLORS..=MAX_COLORS).contains(&count) {
            return Err(PaletteError::InvalidLength { len: count });
        }
        self.generation.constraints.validate()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmony::HarmonyMode;
    use crate::mood::Mood;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn empty_text_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn full_config() {
        let config = Config::parse(
            r#"
            [generation]
            count = 6
            harmony-mode = "analogous"
            mood = "earthy"
            min-adjacent-contrast = 1.5
            dark-mode-friendly = true
            seed = 7

            [export]
            format = "scss"
            prefix = "brand"
            "#,
        )
        .unwrap();

        assert_eq!(config.generation.count, 6);
        let c = &config.generation.constraints;
        assert_eq!(c.harmony_mode, HarmonyMode::Analogous);
        assert_eq!(c.mood, Mood::Earthy);
        assert!((c.min_adjacent_contrast - 1.5).abs() < f64::EPSILON);
        assert!(c.dark_mode_friendly);
        assert_eq!(c.seed, Some(7));
        assert_eq!(config.export.format, ExportFormat::Scss);
        assert_eq!(config.export.options.prefix, "brand");
        assert_eq!(config.export.options.name, "palette");
    }

    #[test]
    fn count_out_of_range() {
        assert!(matches!(
            Config::parse("[generation]\ncount = 9\n"),
            Err(PaletteError::InvalidLength { len: 9 })
        ));
    }

    #[test]
    fn contrast_floor_out_of_range() {
        assert!(matches!(
            Config::parse("[generation]\nmin-adjacent-contrast = 7.0\n"),
            Err(PaletteError::InvalidConstraint { .. })
        ));
    }

    #[test]
    fn malformed_toml() {
        assert!(matches!(
            Config::parse("[generation\n"),
            Err(PaletteError::Config(_))
        ));
        assert!(matches!(
            Config::parse("[generation]\nmood = \"gloomy\"\n"),
            Err(PaletteError::Config(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generation]\nmood = \"pastel\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.generation.constraints.mood, Mood::Pastel);
        assert_eq!(config.generation.count, DEFAULT_COUNT);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, PaletteError::Io(_)));
    }

    #[test]
    fn config_error_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "count = [").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
