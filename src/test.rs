/// Check for equality between two components allowing for 16-bit rounding
/// errors.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!(
            $actual,
            $expected,
            epsilon = 1.0 / i16::MAX as $crate::math::Component
        );
    }};
}

/// Check that two integer channels differ by at most one step.
#[macro_export]
macro_rules! assert_channel_near {
    ($actual:expr,$expected:expr) => {{
        let (actual, expected) = ($actual as i64, $expected as i64);
        assert!(
            (actual - expected).abs() <= 1,
            "channel {} is not within one step of {}",
            actual,
            expected
        );
    }};
}
