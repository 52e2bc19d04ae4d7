//! Model a color with the HSL notation in the sRGB color space.

use crate::{color::Component, math::normalize_hue};

tinct_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue in degrees, in [0, 360) when produced by a conversion.
        hue: Component,
        /// The saturation as a fraction in [0, 1].
        saturation: Component,
        /// The lightness as a fraction in [0, 1].
        lightness: Component,
    }
}

impl Hsl {
    /// Return the same color with its hue rotated by `degrees`. Saturation and
    /// lightness are kept as they are.
    pub fn rotate_hue(&self, degrees: Component) -> Hsl {
        Hsl::new(
            normalize_hue(self.hue + degrees),
            self.saturation,
            self.lightness,
        )
    }
}
