use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// sRGB display color, channels in [0, 1]. Serialized as `#rrggbb`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(hex: &str) -> anyhow::Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            bail!("expected a #rrggbb color, got {hex:?}");
        }

        let channel = |range: std::ops::Range<usize>| -> anyhow::Result<f32> {
            let value = u8::from_str_radix(&digits[range], 16)
                .with_context(|| format!("invalid hex digits in {hex:?}"))?;
            Ok(value as f32 / 255.0)
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Linear-light channels for shading into an sRGB target
    pub fn to_linear(self) -> [f32; 3] {
        fn decode(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [decode(self.r), decode(self.g), decode(self.b)]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(f, "#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_default_box_color() {
        let color: Color = "#ffff77".parse().unwrap();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 1.0);
        assert!((color.b - 0x77 as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_hex_without_hash() {
        assert_eq!(Color::from_hex("00ffff").unwrap(), Color::rgb(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("#ffé777").is_err());
    }

    #[test]
    fn test_display_round_trips_through_serde() {
        let color = Color::from_hex("#777777").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#777777\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }

    #[test]
    fn test_to_linear_endpoints() {
        assert_eq!(Color::BLACK.to_linear(), [0.0, 0.0, 0.0]);
        let white = Color::WHITE.to_linear();
        assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));
    }
}
