//! Print tint/shade ramps and harmonies for a list of base colors.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tinct::{Harmony, HexFormat, Palette, PaletteConfig, ScaleColor, StepsConfig, Swatch};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "swatches", about = "Tints, shades and harmonies of hex colors")]
struct Cli {
    /// Base colors, 3 or 6 hex digits with an optional leading '#'.
    #[arg(required = true)]
    colors: Vec<String>,

    /// JSON palette configuration. Flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of evenly spaced ratios per ramp.
    #[arg(short, long, conflicts_with = "ratios")]
    steps: Option<usize>,

    /// Explicit comma separated ratios, e.g. 0,0.25,0.5.
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    ratios: Option<Vec<f64>>,

    /// Append pure white/black after the ramps.
    #[arg(long)]
    endpoint: bool,

    /// Harmonies to derive (repeatable). Defaults to all of them.
    #[arg(long = "harmony")]
    harmonies: Vec<String>,

    /// Prefix colors with '#'.
    #[arg(long)]
    hash: bool,

    /// Print the palette as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<PaletteConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            PaletteConfig::from_json(&json)
                .with_context(|| format!("could not parse {}", path.display()))?
        }
        None => PaletteConfig::default(),
    };

    if let Some(count) = cli.steps {
        config.steps = StepsConfig::Count(count);
    }
    if let Some(ratios) = &cli.ratios {
        config.steps = StepsConfig::Ratios(ratios.clone());
    }
    if cli.endpoint {
        config.endpoint = true;
    }
    if cli.hash {
        config.format.hash_prefix = true;
    }
    if !cli.harmonies.is_empty() {
        config.harmonies = cli
            .harmonies
            .iter()
            .map(|name| name.parse::<Harmony>())
            .collect::<tinct::Result<_>>()?;
    }

    Ok(config)
}

fn ramp_line(label: &str, ramp: &[ScaleColor], format: &HexFormat) -> String {
    let cells = ramp
        .iter()
        .map(|c| format!("{} {}%", format.apply(&c.hex), c.percent))
        .collect::<Vec<_>>();
    format!("  {label:<20}{}", cells.join("  "))
}

fn print_swatch(swatch: &Swatch, format: &HexFormat) {
    println!("{}", format.apply(&swatch.base));
    println!("{}", ramp_line("tints", &swatch.tints, format));
    println!("{}", ramp_line("shades", &swatch.shades, format));
    for harmony in &swatch.harmonies {
        let colors = harmony
            .colors
            .iter()
            .map(|hex| format.apply(hex))
            .collect::<Vec<_>>();
        println!("  {:<20}{}", harmony.harmony.to_string(), colors.join("  "));
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    tracing::debug!(?config, "resolved configuration");

    let palette = Palette::build(cli.colors.as_slice(), &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&palette)?);
        return Ok(());
    }

    for (i, swatch) in palette.swatches.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_swatch(swatch, &config.format);
    }

    Ok(())
}
