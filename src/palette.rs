//! Palettes for several base colors at once.
//!
//! ```rust
//! use tinct::{Palette, PaletteConfig};
//! let config = PaletteConfig::from_json(r#"{"steps": [0, 0.5], "harmonies": ["triadic"]}"#).unwrap();
//! let palette = Palette::build(&["#3b82f6"], &config).unwrap();
//! assert_eq!(palette.swatches[0].tints[1].hex, "9dc1fb");
//! assert_eq!(palette.swatches[0].harmonies[0].colors, ["f63b82", "82f63b"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    color::Component, Error, Harmonies, Harmony, Hex, HexFormat, Mix, Result, ScaleColor, Steps,
    DEFAULT_STEP_COUNT,
};

/// How the ratios of a palette are given in a configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepsConfig {
    /// Evenly spaced ratios, see [`Steps::count`].
    Count(usize),
    /// An explicit list of ratios.
    Ratios(Vec<Component>),
}

impl Default for StepsConfig {
    fn default() -> Self {
        StepsConfig::Count(DEFAULT_STEP_COUNT)
    }
}

impl StepsConfig {
    /// Validate into [`Steps`].
    pub fn to_steps(&self) -> Result<Steps> {
        match self {
            StepsConfig::Count(count) => Ok(Steps::count(*count)),
            StepsConfig::Ratios(ratios) => Steps::from_ratios(ratios.as_slice()),
        }
    }
}

/// Everything that controls how a [`Palette`] is built and written out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Ratios for both the tint and the shade ramps.
    pub steps: StepsConfig,
    /// Append pure white/black after the tint/shade ramps.
    pub endpoint: bool,
    /// Harmonies to derive for every base color.
    pub harmonies: Vec<Harmony>,
    /// Output formatting.
    pub format: HexFormat,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            steps: StepsConfig::default(),
            endpoint: false,
            harmonies: Harmony::ALL.to_vec(),
            format: HexFormat::default(),
        }
    }
}

impl PaletteConfig {
    /// Read a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| Error::InvalidConfig {
            message: err.to_string(),
        })
    }

    /// The selected harmonies.
    pub fn selection(&self) -> Harmonies {
        self.harmonies.iter().copied().collect()
    }
}

/// The companions of a base color for one harmony.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HarmonyColors {
    /// Which relationship.
    pub harmony: Harmony,
    /// One color per offset of the harmony.
    pub colors: Vec<Hex>,
}

/// Everything derived from a single base color.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Swatch {
    /// The normalized base color.
    pub base: Hex,
    /// Mixes toward white.
    pub tints: Vec<ScaleColor>,
    /// Mixes toward black.
    pub shades: Vec<ScaleColor>,
    /// The selected harmonies, in display order.
    pub harmonies: Vec<HarmonyColors>,
}

/// Swatches for a list of base colors, in input order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Palette {
    /// One swatch per base color.
    pub swatches: Vec<Swatch>,
}

impl Palette {
    /// Build a palette. Base colors are parsed with the lenient rule and the
    /// first invalid one fails the whole palette.
    pub fn build<S: AsRef<str>>(colors: &[S], config: &PaletteConfig) -> Result<Self> {
        let bases = colors
            .iter()
            .map(|c| Hex::parse(c.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let steps = config.steps.to_steps()?;
        let selection = config.selection();

        tracing::debug!(
            colors = bases.len(),
            steps = steps.len(),
            endpoint = config.endpoint,
            "building palette"
        );

        let ramp = |base: &Hex, mix: Mix| {
            if config.endpoint {
                base.ramp_with_endpoint(mix, &steps)
            } else {
                base.ramp(mix, &steps)
            }
        };

        let swatches = bases
            .iter()
            .map(|base| Swatch {
                base: *base,
                tints: ramp(base, Mix::Tint),
                shades: ramp(base, Mix::Shade),
                harmonies: selection
                    .harmonies()
                    .map(|harmony| HarmonyColors {
                        harmony,
                        colors: base.harmony(harmony),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self { swatches })
    }
}
