//! Hex color parsing and channel interpolation.

use crate::error::{BannerError, BannerResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a strict `#RRGGBB` string.
    ///
    /// Anything else (short forms, named colors, missing `#`, non-hex digits)
    /// is rejected rather than clamped.
    pub fn parse(s: &str) -> BannerResult<Self> {
        let invalid = || BannerError::InvalidColorFormat(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Linear interpolation between two colors.
    ///
    /// `ratio` is clamped to `[0, 1]`; `0` yields `a`, `1` yields `b`.
    pub fn lerp(a: Rgb, b: Rgb, ratio: f64) -> Rgb {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        let mix = |x: u8, y: u8| {
            let v = x as f64 * (1.0 - ratio) + y as f64 * ratio;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: mix(a.r, b.r),
            g: mix(a.g, b.g),
            b: mix(a.b, b.b),
        }
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::parse(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = BannerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::parse(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl From<Rgb> for tiny_skia::Color {
    fn from(color: Rgb) -> Self {
        tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255)
    }
}

impl From<Rgb> for tiny_skia::PremultipliedColorU8 {
    fn from(color: Rgb) -> Self {
        tiny_skia::ColorU8::from_rgba(color.r, color.g, color.b, 255).premultiply()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_channels() {
        let c = Rgb::parse("#1a2B3c").unwrap();
        assert_eq!(c, Rgb::new(0x1a, 0x2b, 0x3c));
    }

    #[rstest]
    #[case("#000000")]
    #[case("#ffffff")]
    #[case("#00ffcc")]
    #[case("#222222")]
    #[case("#b21f1f")]
    fn test_hex_round_trip(#[case] hex: &str) {
        assert_eq!(Rgb::parse(hex).unwrap().to_hex(), hex);
    }

    #[test]
    fn test_round_trip_every_channel_value() {
        for v in 0..=255u8 {
            let hex = format!("#{v:02x}{:02x}{v:02x}", 255 - v);
            assert_eq!(Rgb::parse(&hex).unwrap().to_hex(), hex);
        }
    }

    #[rstest]
    #[case("")]
    #[case("#")]
    #[case("ffffff")]
    #[case("#fff")]
    #[case("#fffffff")]
    #[case("#gg0000")]
    #[case("red")]
    #[case("#+f0000")]
    #[case(" #ffffff")]
    #[case("#ff\u{e9}00")]
    fn test_parse_rejects_malformed(#[case] input: &str) {
        assert!(matches!(
            Rgb::parse(input),
            Err(BannerError::InvalidColorFormat(s)) if s == input
        ));
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.25)]
    #[case(0.5)]
    #[case(1.0)]
    fn test_lerp_identity(#[case] ratio: f64) {
        let c = Rgb::new(12, 200, 77);
        assert_eq!(Rgb::lerp(c, c, ratio), c);
    }

    #[test]
    fn test_lerp_endpoints_and_rounding() {
        let a = Rgb::BLACK;
        let b = Rgb::WHITE;
        assert_eq!(Rgb::lerp(a, b, 0.0), a);
        assert_eq!(Rgb::lerp(a, b, 1.0), b);
        // 127.5 rounds half away from zero
        assert_eq!(Rgb::lerp(a, b, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(Rgb::lerp(a, b, 0.99), Rgb::new(252, 252, 252));
    }

    #[test]
    fn test_lerp_clamps_ratio() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(Rgb::lerp(a, b, -3.0), a);
        assert_eq!(Rgb::lerp(a, b, 7.0), b);
    }

    #[test]
    fn test_serde_uses_strict_parser() {
        let c: Rgb = serde_json::from_str("\"#00ffcc\"").unwrap();
        assert_eq!(c, Rgb::new(0, 255, 204));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#00ffcc\"");
        assert!(serde_json::from_str::<Rgb>("\"teal\"").is_err());
    }
}
