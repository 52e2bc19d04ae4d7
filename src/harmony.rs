//! Companion colors derived by rotating the hue of a base color.
//!
//! The base color goes RGB -> HSL, the hue is rotated by fixed offsets and
//! the result goes back to RGB. Saturation and lightness are kept, so the
//! output can drift by one unit per channel compared to exact rotation.
//!
//! ```rust
//! use tinct::{complementary, triadic};
//! assert_eq!(complementary("#3b82f6").unwrap(), "f6af3b");
//! assert_eq!(triadic("3b82f6").unwrap(), ["f63b82", "82f63b"]);
//! ```

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{color::Component, Error, Hex, Result};

const COMPLEMENTARY: Component = 180.0;
const SPLIT_COMPLEMENTARY: [Component; 2] = [150.0, 210.0];
const ANALOGOUS: [Component; 2] = [-30.0, 30.0];
const TRIADIC: [Component; 2] = [120.0, 240.0];

/// A fixed hue relationship between a base color and its companions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Harmony {
    /// 180 degrees.
    Complementary,
    /// 150 and 210 degrees.
    SplitComplementary,
    /// -30 and +30 degrees.
    Analogous,
    /// 120 and 240 degrees.
    Triadic,
}

impl Harmony {
    /// Every harmony, in display order.
    pub const ALL: [Harmony; 4] = [
        Harmony::Complementary,
        Harmony::SplitComplementary,
        Harmony::Analogous,
        Harmony::Triadic,
    ];

    /// The hue offsets in degrees, in the order the companions are returned.
    pub fn offsets(&self) -> &'static [Component] {
        match self {
            Harmony::Complementary => &[COMPLEMENTARY],
            Harmony::SplitComplementary => &SPLIT_COMPLEMENTARY,
            Harmony::Analogous => &ANALOGOUS,
            Harmony::Triadic => &TRIADIC,
        }
    }

    /// The name used in configuration files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Harmony::Complementary => "complementary",
            Harmony::SplitComplementary => "split-complementary",
            Harmony::Analogous => "analogous",
            Harmony::Triadic => "triadic",
        }
    }

    fn flag(&self) -> Harmonies {
        match self {
            Harmony::Complementary => Harmonies::COMPLEMENTARY,
            Harmony::SplitComplementary => Harmonies::SPLIT_COMPLEMENTARY,
            Harmony::Analogous => Harmonies::ANALOGOUS,
            Harmony::Triadic => Harmonies::TRIADIC,
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Harmony {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Harmony::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownHarmony {
                name: s.to_string(),
            })
    }
}

bitflags! {
    /// A selection of harmonies to derive for a palette.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Harmonies : u8 {
        /// Select [`Harmony::Complementary`].
        const COMPLEMENTARY = 1 << 0;
        /// Select [`Harmony::SplitComplementary`].
        const SPLIT_COMPLEMENTARY = 1 << 1;
        /// Select [`Harmony::Analogous`].
        const ANALOGOUS = 1 << 2;
        /// Select [`Harmony::Triadic`].
        const TRIADIC = 1 << 3;
    }
}

impl Harmonies {
    /// The selected harmonies in display order.
    pub fn harmonies(&self) -> impl Iterator<Item = Harmony> + '_ {
        Harmony::ALL
            .into_iter()
            .filter(move |h| self.contains(h.flag()))
    }
}

impl Default for Harmonies {
    fn default() -> Self {
        Harmonies::all()
    }
}

impl FromIterator<Harmony> for Harmonies {
    fn from_iter<T: IntoIterator<Item = Harmony>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Harmonies::empty(), |acc, h| acc | h.flag())
    }
}

impl Hex {
    /// Rotate the hue of this color by `degrees`.
    pub fn rotate_hue(&self, degrees: Component) -> Hex {
        self.to_rgb().to_hsl().rotate_hue(degrees).to_rgb().to_hex()
    }

    /// The companions of this color for the given harmony, one per offset.
    pub fn harmony(&self, harmony: Harmony) -> Vec<Hex> {
        let hsl = self.to_rgb().to_hsl();
        harmony
            .offsets()
            .iter()
            .map(|&offset| hsl.rotate_hue(offset).to_rgb().to_hex())
            .collect()
    }
}

fn pair(hex: Hex, offsets: [Component; 2]) -> [Hex; 2] {
    let hsl = hex.to_rgb().to_hsl();
    offsets.map(|offset| hsl.rotate_hue(offset).to_rgb().to_hex())
}

/// The color opposite on the hue wheel.
pub fn complementary(hex: &str) -> Result<Hex> {
    Ok(Hex::parse(hex)?.rotate_hue(COMPLEMENTARY))
}

/// The two colors next to the complement, at 150 and 210 degrees.
pub fn split_complementary(hex: &str) -> Result<[Hex; 2]> {
    Ok(pair(Hex::parse(hex)?, SPLIT_COMPLEMENTARY))
}

/// The two neighbours, at -30 and +30 degrees.
pub fn analogous(hex: &str) -> Result<[Hex; 2]> {
    Ok(pair(Hex::parse(hex)?, ANALOGOUS))
}

/// The other two corners of an equilateral triangle, at 120 and 240 degrees.
pub fn triadic(hex: &str) -> Result<[Hex; 2]> {
    Ok(pair(Hex::parse(hex)?, TRIADIC))
}
