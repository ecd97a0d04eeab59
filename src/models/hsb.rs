//! Model a color with the HSB (HSV) notation.

shadekit_macros::gen_model! {
    /// A color specified with hue, saturation and brightness. Brightness is
    /// what HSV calls "value".
    pub struct Hsb {
        /// The hue of the color in degrees.
        #[max(360)]
        hue: u16,
        /// The saturation of the color in percent.
        #[max(100)]
        saturation: u8,
        /// The brightness of the color in percent.
        #[max(100)]
        brightness: u8,
    }
}
