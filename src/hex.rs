//! Validation and parsing of hex color strings.
//!
//! Two acceptance rules exist and callers depend on the difference:
//!
//! - The lenient rule ([`normalize_hex`], [`Hex::parse`]) trims whitespace,
//!   strips one leading `#`, ignores case and expands 3 digit shorthand.
//! - The strict rule ([`Hex::parse_strict`]) accepts exactly 6 hex digits and
//!   nothing else. It guards the ramp generators.
//!
//! ```rust
//! use tinct::{normalize_hex, Hex};
//! assert_eq!(normalize_hex("#A1B").unwrap(), "aa11bb");
//! assert!(Hex::parse_strict("#aa11bb").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{Error, Result, Rgb};

/// A validated color: 6 hex digits, rendered lowercase and without a `#`.
///
/// A `Hex` can only be obtained through validation or from [`Rgb::to_hex`],
/// so code receiving one never has to check it again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hex([u8; 3]);

impl Hex {
    /// Pure black, `000000`.
    pub const BLACK: Hex = Hex([0, 0, 0]);
    /// Pure white, `ffffff`.
    pub const WHITE: Hex = Hex([255, 255, 255]);

    /// Create a hex color from its channel bytes.
    pub const fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Self([red, green, blue])
    }

    /// Parse with the lenient rule, failing with [`Error::InvalidHex`].
    pub fn parse(input: &str) -> Result<Self> {
        normalize_hex(input).ok_or(Error::InvalidHex)
    }

    /// Parse with the strict rule, failing with [`Error::InvalidStrictHex`].
    pub fn parse_strict(input: &str) -> Result<Self> {
        if input.len() != 6 || !input.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidStrictHex);
        }
        decode(input).ok_or(Error::InvalidStrictHex)
    }

    /// Parse a loosely typed value with the strict rule. Anything other than
    /// a JSON string is rejected.
    pub fn parse_strict_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Self::parse_strict(s),
            _ => Err(Error::InvalidStrictHex),
        }
    }

    /// The red, green and blue channel bytes.
    pub fn channels(&self) -> [u8; 3] {
        self.0
    }

    /// Convert to an [`Rgb`] color with channels on the 0-255 scale.
    pub fn to_rgb(&self) -> Rgb {
        let [red, green, blue] = self.0;
        Rgb::new(red.into(), green.into(), blue.into())
    }
}

/// Normalize user input into a [`Hex`] with the lenient rule. Returns `None`
/// when the input can not be normalized; never fails otherwise.
pub fn normalize_hex(input: &str) -> Option<Hex> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        6 => decode(digits),
        3 => {
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            decode(&expanded)
        }
        _ => None,
    }
}

/// Same as [`normalize_hex`], but for loosely typed input. Values that are
/// not strings never match.
pub fn normalize_hex_value(value: &Value) -> Option<Hex> {
    value.as_str().and_then(normalize_hex)
}

/// Decode 6 hex digits. The caller has already checked the length.
fn decode(digits: &str) -> Option<Hex> {
    let pair = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some(Hex([pair(0)?, pair(2)?, pair(4)?]))
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [red, green, blue] = self.0;
        write!(f, "{red:02x}{green:02x}{blue:02x}")
    }
}

impl FromStr for Hex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&Value> for Hex {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        normalize_hex_value(value).ok_or(Error::InvalidHex)
    }
}

impl PartialEq<str> for Hex {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for Hex {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn six_digits_are_lowercased() {
        assert_eq!(normalize_hex("3B82F6").unwrap().to_string(), "3b82f6");
        assert_eq!(normalize_hex("  #3b82f6\n").unwrap().to_string(), "3b82f6");
    }

    #[test]
    fn shorthand_is_expanded() {
        assert_eq!(normalize_hex("#a1b").unwrap().to_string(), "aa11bb");
        assert_eq!(normalize_hex("bad").unwrap().to_string(), "bbaadd");
        assert_eq!(normalize_hex("FFF").unwrap(), Hex::WHITE);
    }

    #[test]
    fn malformed_input_does_not_match() {
        for input in ["", "#", "##abc", "abcd", "abcde", "abcdefa", "zzzzzz", "12 456", "#ab"] {
            assert!(normalize_hex(input).is_none(), "{input:?} should not match");
        }
    }

    #[test]
    fn non_string_values_do_not_match() {
        assert!(normalize_hex_value(&json!(123456)).is_none());
        assert!(normalize_hex_value(&json!(null)).is_none());
        assert!(normalize_hex_value(&json!(["abc"])).is_none());
        assert_eq!(normalize_hex_value(&json!("#abc")).unwrap(), "aabbcc");
        assert_eq!(Hex::try_from(&json!(false)), Err(Error::InvalidHex));
    }

    #[test]
    fn compares_only_against_canonical_text() {
        let hex = Hex::parse("AABBCC").unwrap();
        assert_eq!(hex, "aabbcc");
        assert_ne!(hex, "AABBCC");
        assert_ne!(hex, "#aabbcc");
        assert_ne!(hex, "abc");
    }

    #[test]
    fn parse_reports_lenient_error() {
        assert_eq!(Hex::parse("zzzzzz"), Err(Error::InvalidHex));
        assert_eq!("#0F0".parse::<Hex>().unwrap(), "00ff00");
    }

    #[test]
    fn strict_parse_rejects_prefix_and_shorthand() {
        assert_eq!(Hex::parse_strict("663399").unwrap(), "663399");
        assert_eq!(Hex::parse_strict("66339A").unwrap(), "66339a");
        for input in ["abc", "#663399", " 663399", "66339", "6633999", "66339g"] {
            assert_eq!(Hex::parse_strict(input), Err(Error::InvalidStrictHex));
        }
        assert_eq!(
            Hex::parse_strict_value(&json!(663399)),
            Err(Error::InvalidStrictHex)
        );
    }

    #[test]
    fn channels_are_decoded() {
        let hex = Hex::parse("3b82f6").unwrap();
        assert_eq!(hex.channels(), [0x3b, 0x82, 0xf6]);
        assert_eq!(hex.to_rgb(), Rgb::new(59.0, 130.0, 246.0));
    }

    #[test]
    fn serializes_as_string() {
        let hex = Hex::from_channels(0x0a, 0x05, 0x0f);
        assert_eq!(serde_json::to_value(hex).unwrap(), json!("0a050f"));
        let back: Hex = serde_json::from_value(json!("#0A050F")).unwrap();
        assert_eq!(back, hex);
        assert!(serde_json::from_value::<Hex>(json!("nope")).is_err());
    }
}
