//! Degree-based trigonometry used by the ephemeris and the face.
//!
//! The almanac formulas are written in degrees; keeping every conversion in
//! this one place means the ephemeris reads like the formulas themselves.
//! Face angles are turned into degrees with [`turns_to_degrees`] and go
//! through the same helpers.

/// The crate's value of π.
pub const PI: f64 = std::f64::consts::PI;

#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Degrees in `turns` full rotations.
#[inline]
pub fn turns_to_degrees(turns: f64) -> f64 {
    turns * 360.0
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    to_radians(degrees).sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    to_radians(degrees).cos()
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    to_radians(degrees).tan()
}

/// Arc sine, result in degrees.
#[inline]
pub fn asin_deg(value: f64) -> f64 {
    to_degrees(value.asin())
}

/// Arc cosine, result in degrees.
#[inline]
pub fn acos_deg(value: f64) -> f64 {
    to_degrees(value.acos())
}

/// Arc tangent, result in degrees.
#[inline]
pub fn atan_deg(value: f64) -> f64 {
    to_degrees(value.atan())
}

#[inline]
pub fn floor(value: f64) -> f64 {
    value.floor()
}

/// Bring `value` into `[0, period)` with at most one add or subtract.
///
/// Inputs further out than one period stay out of range; the almanac method
/// only ever produces values within one period of the target interval.
#[inline]
pub fn wrap_once(value: f64, period: f64) -> f64 {
    if value < 0.0 {
        value + period
    } else if value >= period {
        value - period
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_wrappers_match_known_values() {
        assert!((sin_deg(30.0) - 0.5).abs() < 1e-12);
        assert!((cos_deg(60.0) - 0.5).abs() < 1e-12);
        assert!((tan_deg(45.0) - 1.0).abs() < 1e-12);
        assert!((asin_deg(0.5) - 30.0).abs() < 1e-9);
        assert!((acos_deg(0.5) - 60.0).abs() < 1e-9);
        assert!((atan_deg(1.0) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn turns_convert_to_degrees() {
        assert_eq!(turns_to_degrees(0.5), 180.0);
        assert_eq!(turns_to_degrees(1.25), 450.0);
        assert!((sin_deg(turns_to_degrees(0.25)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn wrap_once_only_wraps_a_single_period() {
        assert_eq!(wrap_once(-10.0, 360.0), 350.0);
        assert_eq!(wrap_once(370.0, 360.0), 10.0);
        assert_eq!(wrap_once(360.0, 360.0), 0.0);
        assert_eq!(wrap_once(725.0, 360.0), 365.0);
        assert_eq!(wrap_once(12.5, 24.0), 12.5);
    }
}
