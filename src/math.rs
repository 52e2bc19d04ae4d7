//! Math utility functions.

use num_traits::Float;

use crate::color::Component;

/// Linearly interpolate from `a` to `b` using `t` as the progress between
/// them. `t` is not clamped.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Wrap a hue in degrees into the range [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    ((hue % 360.0) + 360.0) % 360.0
}

/// Round a value to a single decimal place.
pub fn round_to_tenth(value: Component) -> Component {
    (value * 10.0).round() / 10.0
}
