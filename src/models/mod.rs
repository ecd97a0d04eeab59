//! Models are structs that represent a color in one of the editable color
//! spaces. Every channel is a bounded integer, and every way of building a
//! model clamps its channels into range.

mod cmyk;
mod hsb;
mod hsl;
mod rgb;

pub use cmyk::*;
pub use hsb::*;
pub use hsl::*;
pub use rgb::*;

/// The color spaces a color can be edited in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Space {
    /// Red, green and blue channels in `0..=255`.
    Rgb,
    /// Hue in degrees, saturation and lightness in percent.
    Hsl,
    /// Hue in degrees, saturation and brightness (value) in percent.
    Hsb,
    /// Cyan, magenta, yellow and key (black) in percent.
    Cmyk,
}

/// A trait implemented for color models, giving uniform access to their
/// channels.
pub trait Model: Copy + PartialEq {
    /// Names a single channel of the model.
    type Channel: Copy;

    /// The color space the model represents.
    const SPACE: Space;

    /// Return the value of a channel.
    fn channel(&self, channel: Self::Channel) -> i64;

    /// Return a copy of this model with one channel replaced. The value is
    /// clamped into the channel's range.
    fn with_channel(&self, channel: Self::Channel, value: i64) -> Self;

    /// Return a copy of this model with one channel replaced by typed input.
    /// See [`parse_channel`] for how the input is read.
    fn with_input(&self, channel: Self::Channel, input: &str) -> Self {
        self.with_channel(channel, parse_channel(input))
    }
}

/// Read the integer at the start of typed channel input.
///
/// Leading whitespace and a single sign are accepted. A `0x` or `0X` prefix
/// switches to hexadecimal digits. Reading stops at the first character that
/// is not a digit, and input without any leading digits reads as 0, so
/// `"12.7"` is 12, `"12px"` is 12, `"0x1f"` is 31 and `"abc"` is 0.
pub fn parse_channel(input: &str) -> i64 {
    let input = input.trim_start();

    let (negative, digits) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let (radix, digits) = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, digits),
    };

    let value = digits
        .chars()
        .map_while(|c| c.to_digit(radix))
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(radix as i64).saturating_add(digit as i64)
        });

    if negative {
        -value
    } else {
        value
    }
}
