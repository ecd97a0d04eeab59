//! Model a color with cyan, magenta, yellow and key (black) channels.

shadekit_macros::gen_model! {
    /// A color specified with the CMYK notation. The channels are derived
    /// quantities and are not normalized to sum to any total.
    pub struct Cmyk {
        /// The cyan channel in percent.
        #[max(100)]
        cyan: u8,
        /// The magenta channel in percent.
        #[max(100)]
        magenta: u8,
        /// The yellow channel in percent.
        #[max(100)]
        yellow: u8,
        /// The key (black) channel in percent.
        #[max(100)]
        key: u8,
    }
}
