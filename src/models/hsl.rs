//! Model a color with the HSL notation.

shadekit_macros::gen_model! {
    /// A color specified with hue, saturation and lightness.
    pub struct Hsl {
        /// The hue of the color in degrees.
        #[max(360)]
        hue: u16,
        /// The saturation of the color in percent.
        #[max(100)]
        saturation: u8,
        /// The lightness of the color in percent.
        #[max(100)]
        lightness: u8,
    }
}
