//! Palette export to CSS custom properties, SCSS variables, a Tailwind
//! `colors` block and a JSON document.
//!
//! Entries are numbered from 1 in palette order:
//!
//! ```text
//! :root {
//!   --color-1: #E63946;
//!   --color-2: #F1FAEE;
//! }
//! ```

use std::fmt::{self, Write};

use hf_color::Color;
use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};
use crate::palette::Palette;

/// Tool name written into JSON documents.
const GENERATOR: &str = "hueforge";

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    #[default]
    Css,
    Scss,
    Tailwind,
    Json,
}

impl ExportFormat {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
        }
    }

    /// # Errors
    ///
    /// Returns [`PaletteError::UnknownName`] for an unrecognized name.
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|f| f.name() == lower)
            .copied()
            .ok_or_else(|| PaletteError::UnknownName {
                kind: "export format",
                name: name.to_owned(),
            })
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Css, Self::Scss, Self::Tailwind, Self::Json]
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Naming for exported entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExportOptions {
    /// Palette name, used as the JSON `name` and Tailwind key.
    pub name: String,
    /// Variable prefix; entries become `{prefix}-1`, `{prefix}-2`, ...
    pub prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            name: "palette".to_owned(),
            prefix: "color".to_owned(),
        }
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    name: &'a str,
    generated_by: &'static str,
    path: String,
    colors: Vec<JsonColor>,
}

#[derive(Serialize)]
struct JsonColor {
    name: String,
    hex: String,
    rgb: [u8; 3],
    hsl: [i32; 3],
    oklch: [f64; 3],
}

impl JsonColor {
    fn new(name: String, color: Color) -> Self {
        let (h, s, l) = color.to_hsl().rounded();
        let ok = color.to_oklch();
        Self {
            name,
            hex: color.to_hex(),
            rgb: [color.r, color.g, color.b],
            hsl: [h, s, l],
            oklch: [round_to(ok.l, 4), round_to(ok.c, 4), round_to(ok.h, 2)],
        }
    }
}

fn round_to(v: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (v * scale).round() / scale
}

/// Render `palette` in `format`.
///
/// # Errors
///
/// Fails if JSON serialization or text formatting fails.
pub fn export(palette: &Palette, format: ExportFormat, opts: &ExportOptions) -> Result<String> {
    let entries = palette
        .iter()
        .enumerate()
        .map(|(i, c)| (format!("{}-{}", opts.prefix, i + 1), c));

    let mut out = String::new();
    match format {
        ExportFormat::Css => {
            out.push_str(":root {\n");
            for (name, c) in entries {
                writeln!(out, "  --{name}: {c};")?;
            }
            out.push_str("}\n");
        }
        ExportFormat::Scss => {
            for (name, c) in entries {
                writeln!(out, "${name}: {c};")?;
            }
        }
        ExportFormat::Tailwind => write_tailwind(&mut out, palette, &opts.name)?,
        ExportFormat::Json => {
            let doc = JsonDocument {
                name: &opts.name,
                generated_by: GENERATOR,
                path: palette.to_path(),
                colors: entries.map(|(name, c)| JsonColor::new(name, c)).collect(),
            };
            out = serde_json::to_string_pretty(&doc)?;
            out.push('\n');
        }
    }
    Ok(out)
}

// Tailwind nests shades under one key: `bg-palette-1`.
fn write_tailwind(out: &mut impl Write, palette: &Palette, name: &str) -> fmt::Result {
    writeln!(out, "module.exports = {{")?;
    writeln!(out, "  theme: {{")?;
    writeln!(out, "    extend: {{")?;
    writeln!(out, "      colors: {{")?;
    writeln!(out, "        '{name}': {{")?;
    for (i, c) in palette.iter().enumerate() {
        writeln!(out, "          {}: '{c}',", i + 1)?;
    }
    writeln!(out, "        }},")?;
    writeln!(out, "      }},")?;
    writeln!(out, "    }},")?;
    writeln!(out, "  }},")?;
    writeln!(out, "}};")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Palette {
        Palette::from_path("E63946-1D3557").unwrap()
    }

    #[test]
    fn css_custom_properties() {
        let css = export(&sample(), ExportFormat::Css, &ExportOptions::default()).unwrap();
        assert_eq!(
            css,
            ":root {\n  --color-1: #E63946;\n  --color-2: #1D3557;\n}\n"
        );
    }

    #[test]
    fn scss_uses_prefix() {
        let opts = ExportOptions {
            prefix: "brand".to_owned(),
            ..ExportOptions::default()
        };
        let scss = export(&sample(), ExportFormat::Scss, &opts).unwrap();
        assert_eq!(scss, "$brand-1: #E63946;\n$brand-2: #1D3557;\n");
    }

    #[test]
    fn tailwind_nests_under_name() {
        let opts = ExportOptions {
            name: "sunset".to_owned(),
            ..ExportOptions::default()
        };
        let tw = export(&sample(), ExportFormat::Tailwind, &opts).unwrap();
        assert!(tw.starts_with("module.exports = {\n"));
        assert!(tw.contains("        'sunset': {\n"));
        assert!(tw.contains("          1: '#E63946',\n"));
        assert!(tw.contains("          2: '#1D3557',\n"));
        assert!(tw.ends_with("};\n"));
    }

    #[test]
    fn json_document_fields() {
        let json = export(&sample(), ExportFormat::Json, &ExportOptions::default()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["name"], "palette");
        assert_eq!(v["generated_by"], "hueforge");
        assert_eq!(v["path"], "E63946-1D3557");
        let first = &v["colors"][0];
        assert_eq!(first["name"], "color-1");
        assert_eq!(first["hex"], "#E63946");
        assert_eq!(first["rgb"], serde_json::json!([230, 57, 70]));
        assert_eq!(v["colors"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn json_white_has_unit_lightness() {
        let p = Palette::from_path("FFFFFF-000000").unwrap();
        let json = export(&p, ExportFormat::Json, &ExportOptions::default()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        let l = v["colors"][0]["oklch"][0].as_f64().unwrap();
        assert!((l - 1.0).abs() < 1e-3, "{l}");
        assert_eq!(v["colors"][1]["hsl"], serde_json::json!([0, 0, 0]));
    }

    #[test]
    fn tailwind_block_is_balanced() {
        let tw = export(&sample(), ExportFormat::Tailwind, &ExportOptions::default()).unwrap();
        assert_eq!(tw.matches('{').count(), tw.matches('}').count());
        assert_eq!(tw.lines().count(), 12);
    }

    #[test]
    fn format_error_converts() {
        let err = PaletteError::from(fmt::Error);
        assert!(matches!(err, PaletteError::Format(_)));
    }

    #[test]
    fn format_names() {
        for &f in ExportFormat::all() {
            assert_eq!(f.name().parse::<ExportFormat>().unwrap(), f);
        }
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("yaml".parse::<ExportFormat>().is_err());
    }
}
