//! Math utility functions.

use num_traits::Float;

/// The floating point value used for all normalized channel math. Rounded
/// channel values depend on it, so it is always 64 bits wide.
pub type Component = f64;

/// Blend from `a` to `b` with `t` as the progress between them, weighting
/// each end separately so that `t == 0` and `t == 1` land exactly on `a` and
/// `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

/// Round to the nearest integer, with halfway cases rounding towards positive
/// infinity.
pub fn round(value: Component) -> Component {
    (value + 0.5).floor()
}

/// Round `value` and clamp the result into `[0, max]`.
pub fn quantize(value: Component, max: Component) -> Component {
    round(value).clamp(0.0, max)
}

/// Scale a unit fraction to a byte channel.
pub fn to_byte(unit: Component) -> u8 {
    quantize(unit * 255.0, 255.0) as u8
}

/// Scale a byte channel to a unit fraction.
pub fn to_unit(byte: u8) -> Component {
    byte as Component / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn lerp_hits_both_ends() {
        assert_eq!(lerp(255.0, 63.0, 0.0), 255.0);
        assert_eq!(lerp(255.0, 63.0, 1.0), 63.0);
        assert_component_eq!(lerp::<Component>(0.0, 10.0, 0.25), 2.5);
    }

    #[test]
    fn halfway_rounds_up() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -2.0);
        assert_eq!(round(-2.6), -3.0);
        assert_eq!(round(0.49), 0.0);
    }

    #[test]
    fn quantize_clamps() {
        assert_eq!(quantize(-3.2, 100.0), 0.0);
        assert_eq!(quantize(100.4, 100.0), 100.0);
        assert_eq!(quantize(360.6, 360.0), 360.0);
        assert_eq!(to_byte(1.2), 255);
        assert_eq!(to_byte(-0.1), 0);
        assert_component_eq!(to_unit(255), 1.0);
    }
}
