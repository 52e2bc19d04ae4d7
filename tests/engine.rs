//! End-to-end checks of the public API against known outputs.

use serde_json::json;
use tinct::{
    analogous, calculate_from_value, calculate_shades, calculate_tints, complementary,
    hex_to_rgb, hsl_to_rgb, normalize_hex, rgb_to_hex, rgb_to_hsl, split_complementary, triadic,
    Error, Hex, Hsl, Mix, Rgb, ScaleColor,
};

fn scale(hex: &str, ratio: f64, percent: f64) -> ScaleColor {
    ScaleColor {
        hex: Hex::parse(hex).unwrap(),
        ratio,
        percent,
    }
}

// ============================================================================
// Ramps
// ============================================================================

#[test]
fn locked_tints() {
    let tints = calculate_tints("663399", Some(&[0.0, 0.2, 0.4, 0.6, 0.8])).unwrap();
    assert_eq!(
        tints,
        [
            scale("663399", 0.0, 0.0),
            scale("855cad", 0.2, 20.0),
            scale("a385c2", 0.4, 40.0),
            scale("c2add6", 0.6, 60.0),
            scale("e0d6eb", 0.8, 80.0),
        ]
    );
}

#[test]
fn locked_shades() {
    let shades = calculate_shades("663399", Some(&[0.0, 0.2, 0.4, 0.6, 0.8])).unwrap();
    assert_eq!(
        shades,
        [
            scale("663399", 0.0, 0.0),
            scale("52297a", 0.2, 20.0),
            scale("3d1f5c", 0.4, 40.0),
            scale("29143d", 0.6, 60.0),
            scale("140a1f", 0.8, 80.0),
        ]
    );
}

#[test]
fn default_steps() {
    let explicit = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
    assert_eq!(
        calculate_tints("663399", None).unwrap(),
        calculate_tints("663399", Some(&explicit)).unwrap()
    );
    assert_eq!(calculate_shades("663399", None).unwrap().len(), 10);
}

#[test]
fn ramps_are_deterministic() {
    for hex in ["663399", "3b82f6", "ca228e", "000000", "ffffff"] {
        let steps = [0.9, 0.05, 0.5, 0.333];
        assert_eq!(
            calculate_tints(hex, Some(&steps)).unwrap(),
            calculate_tints(hex, Some(&steps)).unwrap()
        );
        assert_eq!(
            calculate_shades(hex, None).unwrap(),
            calculate_shades(hex, None).unwrap()
        );
    }
}

// ============================================================================
// Harmonies
// ============================================================================

#[test]
fn harmonies_of_blue() {
    assert_eq!(complementary("3b82f6").unwrap(), "f6af3b");
    assert_eq!(split_complementary("3b82f6").unwrap(), ["f6523b", "dff63b"]);
    assert_eq!(analogous("3b82f6").unwrap(), ["3bdff6", "513bf6"]);
    assert_eq!(triadic("3b82f6").unwrap(), ["f63b82", "82f63b"]);
}

#[test]
fn shorthand_complement() {
    assert_eq!(complementary("bad").unwrap(), "ccddaa");
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn hex_round_trip() {
    for r in (0..=255).step_by(15) {
        for g in (0..=255).step_by(51) {
            for b in [0, 1, 127, 128, 254, 255] {
                let hex = Hex::from_channels(r, g, b);
                let text = hex.to_string();
                assert_eq!(rgb_to_hex(&hex_to_rgb(&text).unwrap()), hex);
            }
        }
    }
}

#[test]
fn achromatic_shortcut() {
    for hue in [0.0, 123.4, 359.9] {
        let rgb = hsl_to_rgb(&Hsl::new(hue, 0.0, 0.4));
        assert_eq!(rgb, Rgb::new(102.0, 102.0, 102.0));
    }
}

#[test]
fn clamping() {
    assert_eq!(
        rgb_to_hex(&Rgb::new(-10.0, 300.0, 128.6)),
        rgb_to_hex(&Rgb::new(0.0, 255.0, 129.0))
    );
}

#[test]
fn rotation_matches_hsl_math_within_one_unit() {
    let base = hex_to_rgb("ca228e").unwrap();
    let hsl = rgb_to_hsl(&base);
    for offset in [15.0, 90.0, 180.0, 275.0] {
        let rotated = hsl_to_rgb(&hsl.rotate_hue(offset));
        let back = rgb_to_hsl(&rotated);
        let expected = (hsl.hue + offset) % 360.0;
        let diff = (back.hue - expected).abs().min(360.0 - (back.hue - expected).abs());
        assert!(diff < 1.0, "offset {offset}: {} vs {expected}", back.hue);
    }
}

#[test]
fn shorthand_expansion() {
    assert_eq!(normalize_hex("#a1b").unwrap(), "aa11bb");
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn steps_must_be_a_list() {
    let err = calculate_from_value(Mix::Tint, &json!("ca228e"), Some(&json!(10))).unwrap_err();
    assert!(err.to_string().contains("steps must be an array of numbers"));
}

#[test]
fn ramps_require_six_digits() {
    let err = calculate_tints("abc", None).unwrap_err();
    assert_eq!(err, Error::InvalidStrictHex);
    assert!(err
        .to_string()
        .contains("colorValue must be a 6-character hex string without '#'"));
}

#[test]
fn harmonies_require_valid_hex() {
    let err = complementary("zzzzzz").unwrap_err();
    assert!(err
        .to_string()
        .contains("colorValue must be a valid 3- or 6-character hex string"));
}
