//! Model a color in the sRGB color space with channels on the 0-255 scale.

use crate::{color::Component, math::lerp, Hex};

tinct_macros::gen_model! {
    /// A color specified in the sRGB color space. Channels are not limited
    /// to integers in [0, 255] so mixing can overshoot; [`Rgb::to_hex`] is the
    /// only place they are brought back into range.
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl Rgb {
    /// Black, the target of a shade.
    pub const BLACK: Rgb = Rgb {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };

    /// White, the target of a tint.
    pub const WHITE: Rgb = Rgb {
        red: 255.0,
        green: 255.0,
        blue: 255.0,
    };

    /// Round every channel to the nearest integer, clamp it to [0, 255] and
    /// encode the result.
    pub fn to_hex(&self) -> Hex {
        let channel = |value: Component| value.round().clamp(0.0, 255.0) as u8;
        Hex::from_channels(channel(self.red), channel(self.green), channel(self.blue))
    }

    /// Mix each channel toward `target` by `ratio`. The result is not
    /// rounded or clamped.
    pub fn mix(&self, target: &Rgb, ratio: Component) -> Rgb {
        Rgb::new(
            lerp(self.red, target.red, ratio),
            lerp(self.green, target.green, ratio),
            lerp(self.blue, target.blue, ratio),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Components;

    #[test]
    fn out_of_range_channels_are_clamped_and_rounded() {
        assert_eq!(
            Rgb::new(-10.0, 300.0, 128.6).to_hex(),
            Rgb::new(0.0, 255.0, 129.0).to_hex()
        );
        assert_eq!(Rgb::new(-10.0, 300.0, 128.6).to_hex(), "00ff81");
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(Rgb::new(0.5, 127.5, 254.5).to_hex(), "0180ff");
        assert_eq!(Rgb::new(-0.5, 0.49, 1.49).to_hex(), "000001");
    }

    #[test]
    fn mixing_is_linear() {
        let base = Rgb::new(102.0, 51.0, 153.0);
        assert_eq!(base.mix(&Rgb::WHITE, 0.0), base);
        assert_eq!(base.mix(&Rgb::WHITE, 1.0), Rgb::WHITE);
        assert_eq!(base.mix(&Rgb::BLACK, 0.5), Rgb::new(51.0, 25.5, 76.5));
        assert_eq!(base.mix(&Rgb::BLACK, 2.0), Rgb::new(-102.0, -51.0, -153.0));
    }

    #[test]
    fn components_round_trip() {
        let rgb = Rgb::from(Components(1.0, 2.0, 3.0));
        assert_eq!(rgb.red, 1.0);
        assert_eq!(rgb.green, 2.0);
        assert_eq!(rgb.blue, 3.0);
        assert_eq!(rgb.to_components(), Components(1.0, 2.0, 3.0));
    }
}
