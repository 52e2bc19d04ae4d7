//! tinct computes tint and shade ramps and hue harmonies for hex colors.
//!
//! Everything is a pure function of its arguments: there is no shared state,
//! no I/O and every call can be made from any thread.
//!
//! ```rust
//! use tinct::{calculate_shades, complementary};
//! let shades = calculate_shades("663399", Some(&[0.0, 0.2])).unwrap();
//! assert_eq!(shades[1].hex, "52297a");
//! assert_eq!(complementary("3b82f6").unwrap(), "f6af3b");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod format;
mod harmony;
mod hex;
mod hsl;
mod math;
mod palette;
mod rgb;
mod scale;

pub use color::{Component, Components};
pub use convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use error::{Error, Result};
pub use format::HexFormat;
pub use harmony::{analogous, complementary, split_complementary, triadic, Harmonies, Harmony};
pub use hex::{normalize_hex, normalize_hex_value, Hex};
pub use hsl::Hsl;
pub use palette::{HarmonyColors, Palette, PaletteConfig, StepsConfig, Swatch};
pub use rgb::Rgb;
pub use scale::{
    calculate_from_value, calculate_shades, calculate_tints, Mix, ScaleColor, Steps,
    DEFAULT_STEP_COUNT,
};
