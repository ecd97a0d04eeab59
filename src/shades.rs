//! Tonal ramps running from white, through a base color, to black.

use std::ops::Index;

use crate::hex::{parse_hex, HexColor};
use crate::math::{lerp, round, Component};
use crate::models::Rgb;

/// The number of entries in a full [`ShadeRamp`].
pub const SHADE_COUNT: usize = 201;

/// The index of the base color in a [`ShadeRamp`].
pub const BASE_INDEX: usize = 100;

/// An ordered sequence of shades: index 0 is white, [`BASE_INDEX`] is the
/// base color and the last index is black.
///
/// A ramp is either full ([`SHADE_COUNT`] entries) or empty. An empty ramp
/// means there is no selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShadeRamp(Vec<HexColor>);

impl ShadeRamp {
    /// Generate the ramp around `base`.
    pub fn from_base(base: HexColor) -> Self {
        let base = base.to_rgb();

        let blend = |target: Rgb, t: Component| {
            let channel = |from: u8, to: u8| {
                round(lerp(from as Component, to as Component, t)) as u8
            };
            HexColor::from_rgb(Rgb::new(
                channel(target.red, base.red),
                channel(target.green, base.green),
                channel(target.blue, base.blue),
            ))
        };

        // White up to and including the base.
        let tints = (0..=BASE_INDEX).map(|step| blend(Rgb::WHITE, step as Component / 100.0));

        // Everything after the base, down to black.
        let shades = (1..=BASE_INDEX).map(|step| {
            let t = step as Component / 100.0;
            HexColor::from_rgb(base.map(|c| round(lerp(c as Component, 0.0, t)) as u8))
        });

        Self(tints.chain(shades).collect())
    }

    /// The number of shades, either [`SHADE_COUNT`] or 0.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the ramp is empty, which means there is no selection.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The shade at `index`.
    pub fn get(&self, index: usize) -> Option<HexColor> {
        self.0.get(index).copied()
    }

    /// The color the ramp was generated from.
    pub fn base(&self) -> Option<HexColor> {
        self.get(BASE_INDEX)
    }

    /// Iterate over the shades from white to black.
    pub fn iter(&self) -> std::slice::Iter<'_, HexColor> {
        self.0.iter()
    }

    /// The shades as a slice.
    pub fn as_slice(&self) -> &[HexColor] {
        &self.0
    }
}

impl Index<usize> for ShadeRamp {
    type Output = HexColor;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a ShadeRamp {
    type Item = &'a HexColor;
    type IntoIter = std::slice::Iter<'a, HexColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Generate the ramp around the color written as `#rrggbb`. Input that is
/// not a hex color gives an empty ramp.
pub fn generate_shades(base: &str) -> ShadeRamp {
    HexColor::parse(base)
        .map(ShadeRamp::from_base)
        .unwrap_or_default()
}

/// Estimate where `target` sits on a white to black ramp, from its own
/// channel extremes alone.
///
/// Colors whose largest channel is above 128 are placed in the white half,
/// the rest in the black half. This is an approximation that does not look
/// at any generated ramp, and for a given color it can disagree with where
/// that color actually lands. Input that is not a hex color gives
/// [`BASE_INDEX`].
pub fn closest_shade_index(target: &str) -> usize {
    let Some(rgb) = parse_hex(target) else {
        return BASE_INDEX;
    };

    let max = rgb.max_channel();
    let offset = if max > 128 {
        round(-100.0 * (255 - max) as Component / 255.0)
    } else {
        round(100.0 * (1.0 - rgb.min_channel() as Component / 255.0))
    };

    (BASE_INDEX as i64 + offset as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(ramp: &ShadeRamp) -> Vec<Rgb> {
        ramp.iter().map(|hex| hex.to_rgb()).collect()
    }

    #[test]
    fn endpoints_and_center() {
        let ramp = generate_shades("#3f51b5");
        assert_eq!(ramp.len(), SHADE_COUNT);
        assert_eq!(ramp[0].to_string(), "#ffffff");
        assert_eq!(ramp[BASE_INDEX].to_string(), "#3f51b5");
        assert_eq!(ramp[200].to_string(), "#000000");
        assert_eq!(ramp.base(), HexColor::parse("#3f51b5"));
    }

    #[test]
    fn intermediate_shades() {
        let ramp = generate_shades("#3f51b5");
        assert_eq!(ramp[1].to_rgb(), Rgb::new(253, 253, 254));
        assert_eq!(ramp[50].to_rgb(), Rgb::new(159, 168, 218));
        assert_eq!(ramp[150].to_rgb(), Rgb::new(32, 41, 91));
        assert_eq!(ramp[199].to_rgb(), Rgb::new(1, 1, 2));
    }

    #[test]
    fn base_is_exact_for_any_color() {
        for input in ["#000000", "#ffffff", "#010203", "#fe7f80", "#00ff00"] {
            let ramp = generate_shades(input);
            assert_eq!(ramp.base().map(|c| c.to_string()).as_deref(), Some(input));
            assert_eq!(ramp[0].to_rgb(), Rgb::WHITE);
            assert_eq!(ramp[200].to_rgb(), Rgb::BLACK);
        }
    }

    #[test]
    fn uppercase_base_is_canonical() {
        assert_eq!(generate_shades("#3F51B5"), generate_shades("#3f51b5"));
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate_shades("#8a2be2"), generate_shades("#8a2be2"));
    }

    #[test]
    fn tints_of_black_round_in_double_precision() {
        let ramp = generate_shades("#000000");
        assert_eq!(ramp[10].to_string(), "#e6e6e6");
        assert_eq!(ramp[30].to_string(), "#b3b3b3");
        assert_eq!(ramp[70].to_string(), "#4d4d4d");
        assert_eq!(ramp[90].to_string(), "#191919");
    }

    #[test]
    fn invalid_base_gives_empty_ramp() {
        for input in ["", "#fff", "3f51b5", "#3f51b5ff", "#zzzzzz"] {
            let ramp = generate_shades(input);
            assert!(ramp.is_empty());
            assert_eq!(ramp.base(), None);
        }
    }

    #[test]
    fn channels_never_increase() {
        for input in ["#c89632", "#3f51b5", "#ffffff", "#808080", "#ff0000"] {
            let shades = channels(&generate_shades(input));
            for pair in shades.windows(2) {
                assert!(pair[1].red <= pair[0].red, "{}", input);
                assert!(pair[1].green <= pair[0].green, "{}", input);
                assert!(pair[1].blue <= pair[0].blue, "{}", input);
            }
        }
    }

    #[test]
    fn locator_bounds() {
        assert_eq!(closest_shade_index("#000000"), 200);
        assert_eq!(closest_shade_index("#808080"), 150);
        assert_eq!(closest_shade_index("#800000"), 200);
        assert_eq!(closest_shade_index("#810000"), 51);
        assert_eq!(closest_shade_index("#3f51b5"), 71);

        for value in 0..=255u8 {
            let index = closest_shade_index(&format!("#{:02x}{:02x}00", value, 255 - value));
            assert!(index < SHADE_COUNT);
        }
    }

    #[test]
    fn locator_places_white_on_the_base() {
        // The approximation measures the distance of the largest channel from
        // white, so white itself lands on the base position.
        assert_eq!(closest_shade_index("#ffffff"), BASE_INDEX);
    }

    #[test]
    fn locator_defaults_to_base() {
        assert_eq!(closest_shade_index("not a color"), BASE_INDEX);
        assert_eq!(closest_shade_index("#fff"), BASE_INDEX);
    }
}
