//! Output formatting settings.

use serde::{Deserialize, Serialize};

use crate::Hex;

/// How hex colors are written out for display or copying. Passed explicitly
/// to whatever renders colors; there is no global default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexFormat {
    /// Prefix every color with `#`.
    pub hash_prefix: bool,
}

impl HexFormat {
    /// Write `hex` according to these settings.
    pub fn apply(&self, hex: &Hex) -> String {
        if self.hash_prefix {
            format!("#{hex}")
        } else {
            hex.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_optional() {
        let hex = Hex::parse("#ABC").unwrap();
        assert_eq!(HexFormat::default().apply(&hex), "aabbcc");
        assert_eq!(HexFormat { hash_prefix: true }.apply(&hex), "#aabbcc");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let format: HexFormat = serde_json::from_str("{}").unwrap();
        assert_eq!(format, HexFormat::default());
        let format: HexFormat = serde_json::from_str(r#"{"hash_prefix":true}"#).unwrap();
        assert!(format.hash_prefix);
    }
}
