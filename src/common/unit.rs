//! Unit conversion utilities.
//!
//! All positions and extents in a presentation are English Metric Units
//! (EMU), integers with 914,400 units per inch.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_MM: i64 = 36_000;
pub const EMUS_PER_PT: i64 = 12_700;

/// Largest magnitude of a DrawingML `ST_Coordinate` value.
pub const MAX_COORDINATE: i64 = 27_273_042_316_900;

/// Whether `value` fits `ST_Coordinate`.
#[inline]
pub fn is_coordinate(value: i64) -> bool {
    (-MAX_COORDINATE..=MAX_COORDINATE).contains(&value)
}

/// Round a floating-point coordinate to the nearest integer.
///
/// Ties go to the even neighbour, so `0.5` becomes `0` and `1.5` becomes `2`.
/// Every coordinate the crate integerizes goes through this function.
#[inline]
pub fn round_emu(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Scale an integer local-space delta and round the result.
///
/// Returns `None` when the result falls outside the `ST_Coordinate` range.
#[inline]
pub fn checked_scale_emu(delta: i64, scale: f64) -> Option<i64> {
    let scaled = (delta as f64 * scale).round_ties_even();
    (scaled.abs() <= MAX_COORDINATE as f64).then_some(scaled as i64)
}

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    round_emu(inches * EMUS_PER_INCH as f64)
}

#[inline]
pub fn cm_to_emu(cm: f64) -> i64 {
    round_emu(cm * EMUS_PER_CM as f64)
}

#[inline]
pub fn mm_to_emu(mm: f64) -> i64 {
    round_emu(mm * EMUS_PER_MM as f64)
}

#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    round_emu(pt * EMUS_PER_PT as f64)
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn emu_to_pt(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_emu_ties_to_even() {
        assert_eq!(round_emu(0.5), 0);
        assert_eq!(round_emu(1.5), 2);
        assert_eq!(round_emu(2.5), 2);
        assert_eq!(round_emu(-0.5), 0);
        assert_eq!(round_emu(-1.5), -2);
        assert_eq!(round_emu(99.56), 100);
        assert_eq!(round_emu(200.49), 200);
    }

    #[test]
    fn test_checked_scale_emu_golden_values() {
        assert_eq!(checked_scale_emu(0, 1.0), Some(0));
        assert_eq!(checked_scale_emu(4, 10.0), Some(40));
        assert_eq!(checked_scale_emu(914_400, 914.3), Some(836_035_920));
        assert_eq!(checked_scale_emu(914_400, 914.4), Some(836_127_360));
        assert_eq!(checked_scale_emu(914_242, 943.1), Some(862_221_630));
        assert_eq!(checked_scale_emu(100, 10.36), Some(1036));
    }

    #[test]
    fn test_checked_scale_emu() {
        assert_eq!(checked_scale_emu(-4, 10.0), Some(-40));
        assert_eq!(checked_scale_emu(MAX_COORDINATE, 1.0), Some(MAX_COORDINATE));
        assert_eq!(checked_scale_emu(MAX_COORDINATE, 2.0), None);
        assert_eq!(checked_scale_emu(10_000_000_000_000_000, 1_000_000.0), None);
    }

    #[test]
    fn test_is_coordinate() {
        assert!(is_coordinate(0));
        assert!(is_coordinate(-MAX_COORDINATE));
        assert!(!is_coordinate(MAX_COORDINATE + 1));
        assert!(!is_coordinate(i64::MIN));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(inches_to_emu(1.0), EMUS_PER_INCH);
        assert_eq!(cm_to_emu(2.54), EMUS_PER_INCH);
        assert_eq!(mm_to_emu(10.0), EMUS_PER_CM);
        assert_eq!(pt_to_emu(72.0), EMUS_PER_INCH);
        assert!((emu_to_inches(457_200) - 0.5).abs() < f64::EPSILON);
        assert!((emu_to_pt(12_700) - 1.0).abs() < f64::EPSILON);
    }
}
