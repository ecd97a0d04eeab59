//! Conversions between the editable color models.
//!
//! RGB is the pivot: HSL, HSB and CMYK are only ever produced from RGB and
//! only ever converted back into RGB. There are no direct conversions between
//! the other models, so rounding never compounds across them.
//!
//! NOTE: When a color has no chroma its hue is undefined. The conversions
//!       report a hue (and saturation) of 0 in that case, never NaN.
//!
//! ```rust
//! use shadekit::{Hsb, Hsl, Rgb};
//! let rgb = Rgb::new(63, 81, 181);
//! assert_eq!(rgb.to_hsl(), Hsl::new(231, 48, 48));
//! assert_eq!(rgb.to_hsb(), Hsb::new(231, 65, 71));
//! assert_eq!(rgb.to_hsb().to_rgb(), rgb);
//! ```

use crate::math::{to_byte, Component};
use crate::models::{Cmyk, Hsb, Hsl, Rgb};

impl Rgb {
    /// Convert to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(*self)
    }

    /// Convert to the HSB notation.
    pub fn to_hsb(&self) -> Hsb {
        rgb_to_hsb(*self)
    }

    /// Convert to CMYK channels.
    pub fn to_cmyk(&self) -> Cmyk {
        rgb_to_cmyk(*self)
    }
}

impl Hsl {
    /// Convert from the HSL notation to RGB.
    pub fn to_rgb(&self) -> Rgb {
        hsl_to_rgb(*self)
    }
}

impl Hsb {
    /// Convert from the HSB notation to RGB.
    pub fn to_rgb(&self) -> Rgb {
        hsb_to_rgb(*self)
    }
}

impl Cmyk {
    /// Convert from CMYK channels to RGB.
    pub fn to_rgb(&self) -> Rgb {
        cmyk_to_rgb(*self)
    }
}

/// Convert from RGB to the HSL notation.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [hue, saturation, lightness] = util::rgb_to_hsl(rgb.to_unit());
    Hsl::new(
        util::degrees(hue),
        util::percent(saturation),
        util::percent(lightness),
    )
}

/// Convert from the HSL notation to RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    util::hsl_to_rgb([
        hsl.hue as Component / 360.0,
        hsl.saturation as Component / 100.0,
        hsl.lightness as Component / 100.0,
    ])
    .into()
}

/// Convert from RGB to the HSB notation.
pub fn rgb_to_hsb(rgb: Rgb) -> Hsb {
    let [hue, saturation, brightness] = util::rgb_to_hsb(rgb.to_unit());
    Hsb::new(
        util::degrees(hue),
        util::percent(saturation),
        util::percent(brightness),
    )
}

/// Convert from the HSB notation to RGB.
pub fn hsb_to_rgb(hsb: Hsb) -> Rgb {
    util::hsb_to_rgb([
        hsb.hue as Component / 360.0,
        hsb.saturation as Component / 100.0,
        hsb.brightness as Component / 100.0,
    ])
    .into()
}

/// Convert from RGB to CMYK channels. Pure black is `{0, 0, 0, 100}`.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let [cyan, magenta, yellow, key] = util::rgb_to_cmyk(rgb.to_unit());
    Cmyk::new(
        util::percent(cyan),
        util::percent(magenta),
        util::percent(yellow),
        util::percent(key),
    )
}

/// Convert from CMYK channels to RGB.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    util::cmyk_to_rgb([
        cmyk.cyan as Component / 100.0,
        cmyk.magenta as Component / 100.0,
        cmyk.yellow as Component / 100.0,
        cmyk.key as Component / 100.0,
    ])
    .into()
}

impl From<[Component; 3]> for Rgb {
    /// Quantize unit fractions into byte channels.
    fn from(value: [Component; 3]) -> Self {
        Self::new(to_byte(value[0]), to_byte(value[1]), to_byte(value[2]))
    }
}

/// The unquantized conversions. Hue is a fraction of a turn and every other
/// channel a unit fraction.
mod util {
    use crate::math::{quantize, Component};

    /// Calculate the hue from RGB channels and return it along with the min
    /// and max channel.
    fn hue_with_min_max(rgb: [Component; 3]) -> (Component, Component, Component) {
        let [red, green, blue] = rgb;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            let sixths = if max == red {
                ((green - blue) / delta + if green < blue { 6.0 } else { 0.0 }) % 6.0
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
            sixths / 6.0
        } else {
            0.0
        };

        (hue, min, max)
    }

    pub fn rgb_to_hsl(rgb: [Component; 3]) -> [Component; 3] {
        let (hue, min, max) = hue_with_min_max(rgb);

        let lightness = (max + min) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        [hue, saturation, lightness]
    }

    /// One channel of the HSL inverse, `t` is the hue offset in turns.
    fn hue_to_channel(p: Component, q: Component, mut t: Component) -> Component {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    pub fn hsl_to_rgb(hsl: [Component; 3]) -> [Component; 3] {
        let [hue, saturation, lightness] = hsl;

        if saturation == 0.0 {
            return [lightness; 3];
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        [
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        ]
    }

    pub fn rgb_to_hsb(rgb: [Component; 3]) -> [Component; 3] {
        let (hue, min, max) = hue_with_min_max(rgb);

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        [hue, saturation, max]
    }

    pub fn hsb_to_rgb(hsb: [Component; 3]) -> [Component; 3] {
        let [hue, saturation, value] = hsb;

        if saturation == 0.0 {
            return [value; 3];
        }

        let sector = (hue * 6.0).floor();
        let f = hue * 6.0 - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - f * saturation);
        let t = value * (1.0 - (1.0 - f) * saturation);

        // A full turn lands in sector 6, which is sector 0 again.
        match (sector as i64).rem_euclid(6) {
            0 => [value, t, p],
            1 => [q, value, p],
            2 => [p, value, t],
            3 => [p, q, value],
            4 => [t, p, value],
            _ => [value, p, q],
        }
    }

    pub fn rgb_to_cmyk(rgb: [Component; 3]) -> [Component; 4] {
        let [red, green, blue] = rgb;

        let key = 1.0 - red.max(green).max(blue);
        // 0/0 for pure black.
        let ink = |channel: Component| {
            if key == 1.0 {
                0.0
            } else {
                (1.0 - channel - key) / (1.0 - key)
            }
        };

        [ink(red), ink(green), ink(blue), key]
    }

    pub fn cmyk_to_rgb(cmyk: [Component; 4]) -> [Component; 3] {
        let [cyan, magenta, yellow, key] = cmyk;
        [cyan, magenta, yellow].map(|ink| (1.0 - ink) * (1.0 - key))
    }

    /// Scale a fraction of a turn to whole degrees.
    pub fn degrees(turns: Component) -> u16 {
        quantize(turns.clamp(0.0, 1.0) * 360.0, 360.0) as u16
    }

    /// Scale a unit fraction to a whole percentage.
    pub fn percent(unit: Component) -> u8 {
        quantize(unit.clamp(0.0, 1.0) * 100.0, 100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_channel_near;

    #[test]
    fn reference_color() {
        // #3f51b5
        let rgb = Rgb::new(63, 81, 181);
        assert_eq!(rgb_to_hsl(rgb), Hsl::new(231, 48, 48));
        assert_eq!(rgb_to_hsb(rgb), Hsb::new(231, 65, 71));
        assert_eq!(rgb_to_cmyk(rgb), Cmyk::new(65, 55, 0, 29));
    }

    #[test]
    fn primaries() {
        #[rustfmt::skip]
        const TESTS: &[((u8, u8, u8), (u16, u8, u8), (u16, u8, u8), (u8, u8, u8, u8))] = &[
            ((255, 0, 0), (0, 100, 50), (0, 100, 100), (0, 100, 100, 0)),
            ((0, 255, 0), (120, 100, 50), (120, 100, 100), (100, 0, 100, 0)),
            ((0, 0, 255), (240, 100, 50), (240, 100, 100), (100, 100, 0, 0)),
            ((255, 255, 0), (60, 100, 50), (60, 100, 100), (0, 0, 100, 0)),
            ((0, 255, 255), (180, 100, 50), (180, 100, 100), (100, 0, 0, 0)),
            ((255, 0, 255), (300, 100, 50), (300, 100, 100), (0, 100, 0, 0)),
            ((128, 0, 0), (0, 100, 25), (0, 100, 50), (0, 100, 100, 50)),
        ];

        for &((r, g, b), (h, s, l), (hb, sb, v), (c, m, y, k)) in TESTS {
            let rgb = Rgb::new(r, g, b);
            assert_eq!(rgb.to_hsl(), Hsl::new(h, s, l), "{:?}", rgb);
            assert_eq!(rgb.to_hsb(), Hsb::new(hb, sb, v), "{:?}", rgb);
            assert_eq!(rgb.to_cmyk(), Cmyk::new(c, m, y, k), "{:?}", rgb);
        }
    }

    #[test]
    fn hue_is_zero_if_there_is_no_chroma() {
        for value in [0, 1, 64, 127, 128, 200, 254, 255] {
            let gray = Rgb::new(value, value, value);
            let hsl = gray.to_hsl();
            assert_eq!((hsl.hue, hsl.saturation), (0, 0));
            let hsb = gray.to_hsb();
            assert_eq!((hsb.hue, hsb.saturation), (0, 0));
        }
    }

    #[test]
    fn black_has_no_ink() {
        assert_eq!(rgb_to_cmyk(Rgb::BLACK), Cmyk::new(0, 0, 0, 100));
        assert_eq!(rgb_to_cmyk(Rgb::WHITE), Cmyk::new(0, 0, 0, 0));
        assert_eq!(cmyk_to_rgb(Cmyk::new(0, 0, 0, 100)), Rgb::BLACK);
        assert_eq!(cmyk_to_rgb(Cmyk::new(0, 0, 0, 0)), Rgb::WHITE);
    }

    #[test]
    fn cmyk_inverse() {
        assert_eq!(cmyk_to_rgb(Cmyk::new(65, 55, 0, 29)), Rgb::new(63, 81, 181));
        assert_eq!(cmyk_to_rgb(Cmyk::new(100, 0, 0, 50)), Rgb::new(0, 128, 128));
    }

    #[test]
    fn gray_shortcut() {
        assert_eq!(hsl_to_rgb(Hsl::new(200, 0, 50)), Rgb::new(128, 128, 128));
        assert_eq!(hsb_to_rgb(Hsb::new(200, 0, 50)), Rgb::new(128, 128, 128));
        assert_eq!(hsl_to_rgb(Hsl::new(0, 0, 100)), Rgb::WHITE);
        assert_eq!(hsb_to_rgb(Hsb::new(0, 0, 0)), Rgb::BLACK);
    }

    #[test]
    fn halfway_channels_round_in_double_precision() {
        // p = 2l - q falls just short of 0.1, so green and blue round down.
        assert_eq!(hsl_to_rgb(Hsl::new(0, 50, 20)), Rgb::new(77, 25, 25));
    }

    #[test]
    fn full_turn_wraps_to_red() {
        assert_eq!(hsl_to_rgb(Hsl::new(360, 100, 50)), Rgb::new(255, 0, 0));
        assert_eq!(hsb_to_rgb(Hsb::new(360, 100, 100)), Rgb::new(255, 0, 0));
    }

    #[test]
    fn sectors() {
        assert_eq!(hsb_to_rgb(Hsb::new(30, 100, 100)), Rgb::new(255, 128, 0));
        assert_eq!(hsb_to_rgb(Hsb::new(90, 100, 100)), Rgb::new(128, 255, 0));
        assert_eq!(hsb_to_rgb(Hsb::new(150, 100, 100)), Rgb::new(0, 255, 128));
        assert_eq!(hsb_to_rgb(Hsb::new(210, 100, 100)), Rgb::new(0, 128, 255));
        assert_eq!(hsb_to_rgb(Hsb::new(270, 100, 100)), Rgb::new(128, 0, 255));
        assert_eq!(hsb_to_rgb(Hsb::new(330, 100, 100)), Rgb::new(255, 0, 128));
    }

    #[test]
    fn unquantized_round_trip_within_one_step() {
        for red in (0..=255u8).step_by(5) {
            for green in (0..=255u8).step_by(15) {
                for blue in (0..=255u8).step_by(17) {
                    let rgb = Rgb::new(red, green, blue);

                    let back = Rgb::from(util::hsl_to_rgb(util::rgb_to_hsl(rgb.to_unit())));
                    assert_channel_near!(back.red, rgb.red);
                    assert_channel_near!(back.green, rgb.green);
                    assert_channel_near!(back.blue, rgb.blue);

                    let back = Rgb::from(util::hsb_to_rgb(util::rgb_to_hsb(rgb.to_unit())));
                    assert_channel_near!(back.red, rgb.red);
                    assert_channel_near!(back.green, rgb.green);
                    assert_channel_near!(back.blue, rgb.blue);

                    let back = Rgb::from(util::cmyk_to_rgb(util::rgb_to_cmyk(rgb.to_unit())));
                    assert_channel_near!(back.red, rgb.red);
                    assert_channel_near!(back.green, rgb.green);
                    assert_channel_near!(back.blue, rgb.blue);
                }
            }
        }
    }

    #[test]
    fn whole_percent_round_trip_stays_close() {
        // A whole percent of lightness is 2.55 steps of a byte channel, so
        // the models cannot round trip exactly.
        let error = |a: Rgb, b: Rgb| {
            [
                a.red.abs_diff(b.red),
                a.green.abs_diff(b.green),
                a.blue.abs_diff(b.blue),
            ]
            .into_iter()
            .max()
            .unwrap_or(0)
        };

        for red in (0..=255u8).step_by(5) {
            for green in (0..=255u8).step_by(15) {
                for blue in (0..=255u8).step_by(17) {
                    let rgb = Rgb::new(red, green, blue);
                    assert!(error(rgb.to_hsl().to_rgb(), rgb) <= 5, "{:?}", rgb);
                    assert!(error(rgb.to_hsb().to_rgb(), rgb) <= 3, "{:?}", rgb);
                }
            }
        }
    }

    #[test]
    fn grays_round_trip_within_one_step() {
        for value in 0..=255u8 {
            let gray = Rgb::new(value, value, value);
            assert_channel_near!(gray.to_hsl().to_rgb().red, value);
            assert_channel_near!(gray.to_hsb().to_rgb().red, value);

            let back = gray.to_cmyk().to_rgb();
            assert_eq!((back.green, back.blue), (back.red, back.red));
            assert_channel_near!(back.red, value);
        }
    }
}
