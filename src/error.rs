//! Validation errors returned by the color engine.

use thiserror::Error;

/// Result type alias for tinct operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way an input can be rejected. All of them are raised before any
/// output is produced.
///
/// The messages are matched on by downstream consumers and must stay stable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input is not a 3 or 6 digit hex string with an optional `#`.
    #[error("colorValue must be a valid 3- or 6-character hex string with optional leading '#'.")]
    InvalidHex,

    /// The input is not exactly 6 hex digits. Used by the ramp generators,
    /// which neither strip `#` nor expand shorthand.
    #[error("colorValue must be a 6-character hex string without '#'.")]
    InvalidStrictHex,

    /// The steps are not a list of finite numbers.
    #[error("steps must be an array of numbers.")]
    InvalidSteps,

    /// A harmony name in a palette configuration is not recognized.
    #[error("unknown harmony '{name}', expected one of: complementary, split-complementary, analogous, triadic.")]
    UnknownHarmony {
        /// The name as it was given.
        name: String,
    },

    /// A palette configuration could not be read.
    #[error("invalid palette configuration: {message}")]
    InvalidConfig {
        /// What was wrong with it.
        message: String,
    },
}
