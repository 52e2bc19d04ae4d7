//! Conversions between the hex, RGB and HSL representations.
//!
//! Hue rotation goes RGB -> HSL -> RGB. Every intermediate value is kept as a
//! floating point number and rounding only happens when coming back to RGB,
//! which is what makes the produced hex values reproducible.
//!
//! ```rust
//! use tinct::Hex;
//! let hsl = Hex::parse("#3b82f6").unwrap().to_rgb().to_hsl();
//! assert_eq!(hsl.to_rgb().to_hex(), "3b82f6");
//! ```

use crate::{
    color::{Component, Components},
    Hex, Hsl, Result, Rgb,
};

/// Parse a hex string with the lenient rule and convert it to RGB.
pub fn hex_to_rgb(input: &str) -> Result<Rgb> {
    Ok(Hex::parse(input)?.to_rgb())
}

/// Round, clamp and encode an RGB color.
pub fn rgb_to_hex(rgb: &Rgb) -> Hex {
    rgb.to_hex()
}

/// Convert an RGB color on the 0-255 scale to HSL.
pub fn rgb_to_hsl(rgb: &Rgb) -> Hsl {
    rgb.to_hsl()
}

/// Convert an HSL color to RGB. The channels of the result are integers.
pub fn hsl_to_rgb(hsl: &Hsl) -> Rgb {
    hsl.to_rgb()
}

impl Rgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_components()).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_rgb(&self) -> Rgb {
        util::hsl_to_rgb(&self.to_components()).into()
    }
}

mod util {
    use super::{Component, Components};
    use crate::math::normalize_hue;

    /// Convert from RGB on the 0-255 scale to HSL with the hue in degrees.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = from.map(|v| v / 255.0);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Components(0.0, 0.0, lightness);
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = 60.0
            * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };

        Components(normalize_hue(hue), saturation, lightness)
    }

    /// Convert from HSL with the hue in degrees to RGB on the 0-255 scale.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let hue = normalize_hue(from.0) / 360.0;
        let saturation = from.1.clamp(0.0, 1.0);
        let lightness = from.2.clamp(0.0, 1.0);

        if saturation == 0.0 {
            let gray = (lightness * 255.0).round();
            return Components(gray, gray, gray);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Components(
            hue_to_rgb(p, q, hue + 1.0 / 3.0),
            hue_to_rgb(p, q, hue),
            hue_to_rgb(p, q, hue - 1.0 / 3.0),
        )
        .map(|v| (v * 255.0).round())
    }

    fn hue_to_rgb(p: Component, q: Component, t: Component) -> Component {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }
}
