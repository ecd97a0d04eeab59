//! The `#rrggbb` form of a color.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::Rgb;

/// An sRGB color in its 6-digit hexadecimal form. Always displayed in the
/// canonical lowercase `#rrggbb` form, no matter how it was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct HexColor(Rgb);

/// Reasons a string is not a `#rrggbb` color.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HexParseError {
    /// The string does not start with `#`.
    #[error("hex color must start with '#'")]
    MissingHash,
    /// The wrong number of digits follow the `#`. Short (`#rgb`) and alpha
    /// (`#rrggbbaa`) forms are not accepted.
    #[error("hex color must have exactly 6 digits, found {0}")]
    InvalidLength(usize),
    /// A character after the `#` is not a hexadecimal digit.
    #[error("'{0}' is not a hexadecimal digit")]
    InvalidDigit(char),
}

impl HexColor {
    /// Parse a color written as `#rrggbb` (case-insensitive). Any other shape
    /// returns `None`.
    pub fn parse(input: &str) -> Option<Self> {
        input.parse().ok()
    }

    /// Create the hex form of an RGB color.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    /// The RGB channels of the color.
    pub fn to_rgb(self) -> Rgb {
        self.0
    }
}

impl FromStr for HexColor {
    type Err = HexParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let digits = input.strip_prefix('#').ok_or(HexParseError::MissingHash)?;

        if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(HexParseError::InvalidDigit(c));
        }
        if digits.len() != 6 {
            return Err(HexParseError::InvalidLength(digits.len()));
        }

        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16)
                .map_err(|_| HexParseError::InvalidDigit(digits.as_bytes()[at] as char))
        };

        Ok(Self(Rgb::new(channel(0)?, channel(2)?, channel(4)?)))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { red, green, blue } = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", red, green, blue)
    }
}

impl From<Rgb> for HexColor {
    fn from(value: Rgb) -> Self {
        Self(value)
    }
}

impl From<HexColor> for Rgb {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for HexColor {
    type Error = HexParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parse `#rrggbb` into its RGB channels, or `None` for any other shape.
pub fn parse_hex(input: &str) -> Option<Rgb> {
    HexColor::parse(input).map(HexColor::to_rgb)
}

/// Format RGB channels as `#rrggbb`, two lowercase digits per channel.
pub fn format_hex(red: u8, green: u8, blue: u8) -> HexColor {
    HexColor(Rgb::new(red, green, blue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_six_digits() {
        assert_eq!(parse_hex("#3f51b5"), Some(Rgb::new(63, 81, 181)));
        assert_eq!(parse_hex("#3F51B5"), Some(Rgb::new(63, 81, 181)));
        assert_eq!(parse_hex("#000000"), Some(Rgb::BLACK));
        assert_eq!(parse_hex("#FFFFFF"), Some(Rgb::WHITE));
    }

    #[test]
    fn parse_rejects_other_shapes() {
        for input in [
            "", "#", "3f51b5", "#fff", "#3f51b", "#3f51b5ff", "#3f51g5", " #3f51b5", "#3f51b5 ",
            "#+f51b5", "#3f51b５",
        ] {
            assert_eq!(parse_hex(input), None, "{:?}", input);
        }
    }

    #[test]
    fn parse_errors_say_why() {
        assert_eq!("3f51b5".parse::<HexColor>(), Err(HexParseError::MissingHash));
        assert_eq!("#fff".parse::<HexColor>(), Err(HexParseError::InvalidLength(3)));
        assert_eq!("#3f51b5ff".parse::<HexColor>(), Err(HexParseError::InvalidLength(8)));
        assert_eq!("#3f51x5".parse::<HexColor>(), Err(HexParseError::InvalidDigit('x')));
    }

    #[test]
    fn format_pads_and_lowercases() {
        assert_eq!(format_hex(0, 0, 0).to_string(), "#000000");
        assert_eq!(format_hex(1, 10, 255).to_string(), "#010aff");
        assert_eq!(format_hex(63, 81, 181).to_string(), "#3f51b5");
        assert_eq!(format_hex(63, 81, 181).to_string().len(), 7);
    }

    #[test]
    fn round_trip_normalizes_case() {
        for input in ["#3f51b5", "#3F51B5", "#aBcDeF", "#000000", "#ffffff", "#0a0b0c"] {
            let rgb = parse_hex(input).unwrap();
            let hex = format_hex(rgb.red, rgb.green, rgb.blue);
            assert_eq!(hex.to_string(), input.to_lowercase());
        }
    }

    #[test]
    fn every_byte_round_trips() {
        for value in 0..=255u8 {
            let hex = format_hex(value, 255 - value, value / 2);
            assert_eq!(HexColor::parse(&hex.to_string()), Some(hex));
        }
    }
}
