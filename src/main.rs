// SPDX-License-Identifier: MIT
//
// hueforge — command-line front end for the palette engine.
//
// Wires the two library crates to a handful of subcommands:
//
//   hf-color   → parsing and converting single colors
//   hf-palette → generation, shades, bridges, contrast, simulation,
//                scoring and export
//
// Settings flow from lowest to highest precedence:
//
//   built-in defaults → config.toml → command-line flags
//
// Palettes are read and printed in their URL path form
// (`E63946-F1FAEE-A8DADC`), so output from one command can be fed
// straight into another.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hf_color::Color;
use hf_palette::config::Config;
use hf_palette::contrast::best_text_color;
use hf_palette::export::{ExportFormat, ExportOptions, export};
use hf_palette::palette::{MAX_COLORS, MIN_COLORS};
use hf_palette::score::score_palette;
use hf_palette::vision::simulate_palette;
use hf_palette::{
    ColorBlindnessMode, HarmonyMode, Mood, Palette, PaletteError, contrast_ratio,
    generate_bridge_color, generate_locked, generate_shades, relative_luminance, simulate,
    wcag_rating,
};

const DEFAULT_SHADES: usize = 9;

#[derive(Parser)]
#[command(name = "hueforge")]
#[command(version, about = "Color palette generator", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a palette
    Generate(GenerateArgs),

    /// Lightness ramp of one color, dark to light
    Shades {
        #[arg(value_name = "HEX")]
        color: Color,

        /// Number of steps
        #[arg(short, default_value_t = DEFAULT_SHADES)]
        n: usize,
    },

    /// Color halfway between two colors
    Bridge {
        #[arg(value_name = "A")]
        a: Color,
        #[arg(value_name = "B")]
        b: Color,
    },

    /// WCAG contrast ratio between two colors
    Contrast {
        #[arg(value_name = "A")]
        a: Color,
        #[arg(value_name = "B")]
        b: Color,
    },

    /// Show a color or palette as seen with a color-vision deficiency
    Simulate {
        /// A hex color or a palette path
        #[arg(value_name = "HEX|PATH")]
        input: String,

        #[arg(long)]
        mode: ColorBlindnessMode,
    },

    /// Print a color in every supported notation
    Convert {
        #[arg(value_name = "HEX")]
        color: Color,
    },

    /// Rate a palette's harmony and accessibility
    Score {
        #[arg(value_name = "PATH")]
        palette: Palette,
    },

    /// Render a palette as CSS, SCSS, Tailwind or JSON
    Export {
        #[arg(value_name = "PATH")]
        palette: Palette,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Harmony mode (auto, monochromatic, analogous, complementary,
    /// split-complementary, triadic)
    #[arg(long)]
    mode: Option<HarmonyMode>,

    /// Mood (any, vibrant, pastel, muted, soft, dark, light, earthy, neon)
    #[arg(long)]
    mood: Option<Mood>,

    /// Number of colors (2-8)
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Minimum contrast ratio between neighbors (1.0-4.5)
    #[arg(long, value_name = "RATIO")]
    min_contrast: Option<f64>,

    /// Keep colors dark enough for dark interfaces
    #[arg(long)]
    dark: bool,

    /// Base hue in degrees
    #[arg(long, value_name = "DEGREES", allow_negative_numbers = true)]
    base_hue: Option<f64>,

    /// PRNG seed for a reproducible palette
    #[arg(long)]
    seed: Option<u32>,

    /// Pin a color to a slot (0-based), e.g. --lock 0=E63946
    #[arg(long, value_name = "IDX=HEX", value_parser = parse_lock)]
    lock: Vec<(usize, Color)>,

    /// Print in an export format instead of the palette path
    #[arg(long)]
    format: Option<ExportFormat>,

    #[command(flatten)]
    naming: NamingArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format (css, scss, tailwind, json)
    #[arg(long)]
    format: Option<ExportFormat>,

    #[command(flatten)]
    naming: NamingArgs,
}

#[derive(Args)]
struct NamingArgs {
    /// Palette name in Tailwind and JSON output
    #[arg(long)]
    name: Option<String>,

    /// Variable prefix in CSS and SCSS output
    #[arg(long)]
    prefix: Option<String>,
}

impl NamingArgs {
    fn apply(self, mut opts: ExportOptions) -> ExportOptions {
        if let Some(name) = self.name {
            opts.name = name;
        }
        if let Some(prefix) = self.prefix {
            opts.prefix = prefix;
        }
        opts
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load().context("failed to load user config")?,
    };
    debug!(?config, "effective config");

    match cli.command {
        Commands::Generate(args) => run_generate(args, &config),
        Commands::Shades { color, n } => {
            for shade in generate_shades(color, n) {
                println!("{shade}  {}", shade.to_hsl());
            }
            Ok(())
        }
        Commands::Bridge { a, b } => {
            println!("{}", generate_bridge_color(a, b));
            Ok(())
        }
        Commands::Contrast { a, b } => {
            let ratio = contrast_ratio(a, b);
            println!("{ratio:.2}:1  {}", wcag_rating(ratio));
            Ok(())
        }
        Commands::Simulate { input, mode } => run_simulate(&input, mode),
        Commands::Convert { color } => {
            print_conversions(color);
            Ok(())
        }
        Commands::Score { palette } => {
            let score = score_palette(&palette);
            println!("harmony        {:.1}", score.harmony);
            println!("accessibility  {:.1}", score.accessibility);
            println!("total          {:.1}", score.total);
            Ok(())
        }
        Commands::Export { palette, output } => {
            let format = output.format.unwrap_or(config.export.format);
            let opts = output.naming.apply(config.export.options);
            print!("{}", export(&palette, format, &opts)?);
            Ok(())
        }
    }
}

/// `-v` flags win over `RUST_LOG`; with neither, only warnings show.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_generate(args: GenerateArgs, config: &Config) -> Result<()> {
    let mut constraints = config.generation.constraints.clone();
    if let Some(mode) = args.mode {
        constraints.harmony_mode = mode;
    }
    if let Some(mood) = args.mood {
        constraints.mood = mood;
    }
    if let Some(ratio) = args.min_contrast {
        constraints.min_adjacent_contrast = ratio;
    }
    if args.dark {
        constraints.dark_mode_friendly = true;
    }
    if args.base_hue.is_some() {
        constraints.base_hue = args.base_hue;
    }
    if args.seed.is_some() {
        constraints.seed = args.seed;
    }

    let count = args.count.unwrap_or(config.generation.count);
    let slots = lock_slots(count, &args.lock)?;
    let palette = generate_locked(&slots, &constraints).context("cannot generate palette")?;

    match args.format {
        Some(format) => {
            let opts = args.naming.apply(config.export.options.clone());
            print!("{}", export(&palette, format, &opts)?);
        }
        None => print_palette(&palette),
    }
    Ok(())
}

/// Slot list for `count` colors with the given pins applied.
fn lock_slots(count: usize, locks: &[(usize, Color)]) -> Result<Vec<Option<Color>>> {
    if !(MIN_COLORS..=MAX_COLORS).contains(&count) {
        return Err(PaletteError::InvalidLength { len: count }.into());
    }
    let mut slots = vec![None; count];
    for &(index, color) in locks {
        let Some(slot) = slots.get_mut(index) else {
            bail!("--lock {index}: palette has only {count} slots");
        };
        *slot = Some(color);
    }
    Ok(slots)
}

fn parse_lock(s: &str) -> std::result::Result<(usize, Color), String> {
    let (index, hex) = s
        .split_once('=')
        .ok_or_else(|| format!("expected IDX=HEX, got {s:?}"))?;
    let index = index
        .trim()
        .parse()
        .map_err(|_| format!("slot index {index:?} is not a number"))?;
    let color = Color::hex(hex).map_err(|e| e.to_string())?;
    Ok((index, color))
}

fn run_simulate(input: &str, mode: ColorBlindnessMode) -> Result<()> {
    if input.contains('-') {
        let palette: Palette = input.parse().context("invalid palette path")?;
        println!("{}", simulate_palette(&palette, mode));
    } else {
        let color = Color::hex(input).context("invalid color")?;
        println!("{}", simulate(color, mode));
    }
    Ok(())
}

fn print_palette(palette: &Palette) {
    println!("{palette}");
    let contrasts = palette.adjacent_contrasts();
    for (i, color) in palette.iter().enumerate() {
        match contrasts.get(i) {
            Some(ratio) => {
                let hsl = color.to_hsl().to_string();
                println!("{color}  {hsl:<20}  {ratio:>5.2}:1 to next");
            }
            None => println!("{color}  {}", color.to_hsl()),
        }
    }
}

fn print_conversions(color: Color) {
    println!("hex        {color}");
    println!("rgb        rgb({}, {}, {})", color.r, color.g, color.b);
    println!("hsl        {}", color.to_hsl());
    println!("oklch      {}", color.to_oklch());
    println!("luminance  {:.4}", relative_luminance(color));
    println!("text       {}", best_text_color(color));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
