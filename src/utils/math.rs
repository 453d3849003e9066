//! Scalar helpers used by the integrator, the camera, and the HUD.

/// Linear interpolation from `start` toward `end`. `t` is not clamped.
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Sign of `value` with `sign(0) == 0`, unlike [`f32::signum`].
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Rounds to the given number of decimal places. Values that round to zero
/// come back as `+0.0`, never `-0.0`.
pub fn round_to(value: f32, decimal_places: i32) -> f32 {
    let factor = 10f32.powi(decimal_places);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// `max(lower, min(value, upper))`. The lower bound wins when the range is
/// inverted, where [`f32::clamp`] would panic.
pub fn clamp_lower_wins(value: f32, lower: f32, upper: f32) -> f32 {
    lower.max(value.min(upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(-0.1), -1.0);
    }

    #[test]
    fn lerp_extrapolates_past_one() {
        assert_eq!(lerp(1.0, 3.0, 0.5), 2.0);
        assert_eq!(lerp(1.0, 3.0, 2.0), 5.0);
    }

    #[test]
    fn rounds_to_two_places() {
        assert!((round_to(1.23456, 2) - 1.23).abs() < 1e-6);
        assert!((round_to(-0.987, 2) + 0.99).abs() < 1e-6);
    }

    #[test]
    fn small_negatives_round_to_positive_zero() {
        assert!(round_to(-0.001, 2).is_sign_positive());
        assert!(round_to(-0.0, 2).is_sign_positive());
        assert_eq!(format!("{}", round_to(-0.004, 2)), "0");
    }

    #[test]
    fn inverted_clamp_prefers_lower_bound() {
        assert_eq!(clamp_lower_wins(5.0, 0.0, 2.0), 2.0);
        assert_eq!(clamp_lower_wins(-1.0, 0.0, 2.0), 0.0);
        assert_eq!(clamp_lower_wins(1.0, 3.0, 2.0), 3.0);
    }
}
