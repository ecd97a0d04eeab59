//! Model a color with red, green and blue byte channels.

use crate::math::{to_unit, Component};

shadekit_macros::gen_model! {
    /// A color specified with 8-bit red, green and blue channels. This is the
    /// pivot every other model converts through.
    pub struct Rgb {
        /// The red channel of the color.
        #[max(255)]
        red: u8,
        /// The green channel of the color.
        #[max(255)]
        green: u8,
        /// The blue channel of the color.
        #[max(255)]
        blue: u8,
    }
}

impl Rgb {
    /// Pure white.
    pub const WHITE: Self = Self {
        red: 255,
        green: 255,
        blue: 255,
    };

    /// Pure black.
    pub const BLACK: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
    };

    /// The channels as unit fractions.
    pub fn to_unit(&self) -> [Component; 3] {
        [to_unit(self.red), to_unit(self.green), to_unit(self.blue)]
    }

    /// The largest channel.
    pub fn max_channel(&self) -> u8 {
        self.red.max(self.green).max(self.blue)
    }

    /// The smallest channel.
    pub fn min_channel(&self) -> u8 {
        self.red.min(self.green).min(self.blue)
    }

    /// Return a new color with each channel mapped with the given function.
    pub fn map(&self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }
}
