//! Tint and shade ramps.
//!
//! A ramp mixes a base color toward white (tint) or black (shade) once per
//! ratio in a [`Steps`] list. The output has exactly one entry per ratio, in
//! the order the ratios were given.
//!
//! ```rust
//! use tinct::calculate_tints;
//! let tints = calculate_tints("663399", Some(&[0.0, 0.2])).unwrap();
//! assert_eq!(tints[1].hex, "855cad");
//! assert_eq!(tints[1].percent, 20.0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{color::Component, math::round_to_tenth, Error, Hex, Result, Rgb};

/// Number of ratios in the default ramp.
pub const DEFAULT_STEP_COUNT: usize = 10;

/// The ordered ratios a ramp is generated for.
///
/// Ratios are conventionally in [0, 1) but neither the range nor the order is
/// enforced. They are always finite.
#[derive(Clone, Debug, PartialEq)]
pub struct Steps(Vec<Component>);

impl Steps {
    /// `count` evenly spaced ratios `i / count` for `i` in `0..count`.
    pub fn count(count: usize) -> Self {
        Self(
            (0..count)
                .map(|i| i as Component / count as Component)
                .collect(),
        )
    }

    /// An explicit list of ratios. Fails if any of them is not finite.
    pub fn from_ratios(ratios: impl Into<Vec<Component>>) -> Result<Self> {
        let ratios = ratios.into();
        if ratios.iter().all(|r| r.is_finite()) {
            Ok(Self(ratios))
        } else {
            Err(Error::InvalidSteps)
        }
    }

    /// The ratios in order.
    pub fn ratios(&self) -> &[Component] {
        &self.0
    }

    /// Number of ratios.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no ratios at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Steps {
    /// `[0, 0.1, 0.2, ..., 0.9]`
    fn default() -> Self {
        Self::count(DEFAULT_STEP_COUNT)
    }
}

impl TryFrom<&Value> for Steps {
    type Error = Error;

    /// Accepts only an array made entirely of finite numbers.
    fn try_from(value: &Value) -> Result<Self> {
        let items = value.as_array().ok_or(Error::InvalidSteps)?;
        let ratios = items
            .iter()
            .map(|item| item.as_f64().ok_or(Error::InvalidSteps))
            .collect::<Result<Vec<_>>>()?;
        Self::from_ratios(ratios)
    }
}

/// The direction a ramp mixes toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mix {
    /// Toward black.
    Shade,
    /// Toward white.
    Tint,
}

impl Mix {
    /// The color this direction mixes toward.
    pub fn target(&self) -> Rgb {
        match self {
            Mix::Shade => Rgb::BLACK,
            Mix::Tint => Rgb::WHITE,
        }
    }

    /// The legacy endpoint appended after a fixed ramp.
    pub fn endpoint(&self) -> Hex {
        match self {
            Mix::Shade => Hex::BLACK,
            Mix::Tint => Hex::WHITE,
        }
    }
}

/// One entry of a ramp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScaleColor {
    /// The mixed color.
    pub hex: Hex,
    /// The ratio the color was mixed with.
    pub ratio: Component,
    /// `ratio * 100` rounded to one decimal place.
    pub percent: Component,
}

impl ScaleColor {
    fn new(hex: Hex, ratio: Component) -> Self {
        Self {
            hex,
            ratio,
            // Adding zero turns -0.0 into 0.0.
            percent: round_to_tenth(ratio * 100.0) + 0.0,
        }
    }
}

impl fmt::Display for ScaleColor {
    /// `855cad 20%`, `202020 12.5%`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.hex, self.percent)
    }
}

impl Hex {
    /// Mix this color in the given direction once per ratio.
    pub fn ramp(&self, mix: Mix, steps: &Steps) -> Vec<ScaleColor> {
        let base = self.to_rgb();
        let target = mix.target();

        let ramp: Vec<_> = steps
            .ratios()
            .iter()
            .map(|&ratio| ScaleColor::new(base.mix(&target, ratio).to_hex(), ratio))
            .collect();

        tracing::trace!(base = %self, ?mix, steps = ramp.len(), "generated ramp");

        ramp
    }

    /// Mix this color toward black once per ratio.
    pub fn shades(&self, steps: &Steps) -> Vec<ScaleColor> {
        self.ramp(Mix::Shade, steps)
    }

    /// Mix this color toward white once per ratio.
    pub fn tints(&self, steps: &Steps) -> Vec<ScaleColor> {
        self.ramp(Mix::Tint, steps)
    }

    /// [`Hex::ramp`] followed by pure black or white at ratio 1.
    pub fn ramp_with_endpoint(&self, mix: Mix, steps: &Steps) -> Vec<ScaleColor> {
        let mut ramp = self.ramp(mix, steps);
        ramp.push(ScaleColor::new(mix.endpoint(), 1.0));
        ramp
    }

    /// The older fixed ramp: the 10 default ratios followed by the pure
    /// endpoint.
    pub fn legacy_ramp(&self, mix: Mix) -> Vec<ScaleColor> {
        self.ramp_with_endpoint(mix, &Steps::default())
    }

    /// [`Hex::legacy_ramp`] toward black.
    pub fn legacy_shades(&self) -> Vec<ScaleColor> {
        self.legacy_ramp(Mix::Shade)
    }

    /// [`Hex::legacy_ramp`] toward white.
    pub fn legacy_tints(&self) -> Vec<ScaleColor> {
        self.legacy_ramp(Mix::Tint)
    }
}

fn calculate(mix: Mix, hex: &str, steps: Option<&[Component]>) -> Result<Vec<ScaleColor>> {
    let hex = Hex::parse_strict(hex)?;
    let steps = match steps {
        Some(ratios) => Steps::from_ratios(ratios)?,
        None => Steps::default(),
    };
    Ok(hex.ramp(mix, &steps))
}

/// Shades of a 6 digit hex color without `#`. Omitted steps default to
/// [`Steps::default`].
pub fn calculate_shades(hex: &str, steps: Option<&[Component]>) -> Result<Vec<ScaleColor>> {
    calculate(Mix::Shade, hex, steps)
}

/// Tints of a 6 digit hex color without `#`. Omitted steps default to
/// [`Steps::default`].
pub fn calculate_tints(hex: &str, steps: Option<&[Component]>) -> Result<Vec<ScaleColor>> {
    calculate(Mix::Tint, hex, steps)
}

/// Like [`calculate_shades`] and [`calculate_tints`] but for loosely typed
/// input, e.g. straight out of a JSON request. The color is checked before
/// the steps.
pub fn calculate_from_value(
    mix: Mix,
    hex: &Value,
    steps: Option<&Value>,
) -> Result<Vec<ScaleColor>> {
    let hex = Hex::parse_strict_value(hex)?;
    let steps = match steps {
        Some(value) => Steps::try_from(value)?,
        None => Steps::default(),
    };
    Ok(hex.ramp(mix, &steps))
}
