//! Fraction rendering for scaled quantities.
//!
//! Quantities written as fractions in a recipe read better as fractions after
//! scaling: 3/4 cup scaled by 1.33 is 0.9975, which should show as "1" rather
//! than "1.0". The search below finds the nearest common fraction instead of
//! reconstructing the exact rational, so small scaling error is absorbed.

/// Denominators tried in order. Smaller denominators win ties.
pub const DENOMINATORS: [u32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Absolute error allowed between `d * remainder` and its nearest integer.
pub const FRACTION_TOLERANCE: f64 = 0.01;

/// Format a quantity for display.
///
/// With `as_fraction` unset the value is rounded to one decimal place and a
/// trailing ".0" is dropped. With it set, the fractional part is matched
/// against [`DENOMINATORS`]; values with no match fall back to the decimal
/// form.
///
/// Non-finite values have no sensible rendering and are returned as Rust
/// prints them.
pub fn format_quantity(value: f64, as_fraction: bool) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if as_fraction {
        format_fraction(value)
    } else {
        format_decimal(value)
    }
}

/// Round to one decimal place, omitting ".0".
pub fn format_decimal(value: f64) -> String {
    // Round half away from zero, matching the usual toFixed(1) output for
    // recipe-sized values.
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        // Avoid printing "-0"
        "0".to_string()
    } else if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

fn format_fraction(value: f64) -> String {
    let negative = value < 0.0;
    let magnitude = value.abs();
    let whole = magnitude.floor();
    let remainder = magnitude - whole;

    let Some((numerator, denominator)) = nearest_fraction(remainder) else {
        return format_decimal(value);
    };

    if denominator == 1 {
        let total = whole + numerator;
        if total == 0.0 {
            return "0".to_string();
        }
        let sign = if negative { "-" } else { "" };
        return format!("{}{:.0}", sign, total);
    }

    let sign = if negative { "-" } else { "" };
    if whole == 0.0 {
        format!("{}{:.0}/{}", sign, numerator, denominator)
    } else {
        format!("{}{:.0} {:.0}/{}", sign, whole, numerator, denominator)
    }
}

/// Find the first denominator whose nearest numerator reproduces `remainder`
/// within [`FRACTION_TOLERANCE`]. Returns `(numerator, denominator)`.
fn nearest_fraction(remainder: f64) -> Option<(f64, u32)> {
    DENOMINATORS.iter().find_map(|&denominator| {
        let scaled = f64::from(denominator) * remainder;
        let numerator = scaled.round();
        ((scaled - numerator).abs() <= FRACTION_TOLERANCE).then_some((numerator, denominator))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_drops_trailing_zero() {
        assert_eq!(format_quantity(3.0, false), "3");
        assert_eq!(format_quantity(2.96, false), "3");
        assert_eq!(format_quantity(2.24, false), "2.2");
        assert_eq!(format_quantity(12.0, false), "12");
    }

    #[test]
    fn test_decimal_small_and_negative() {
        assert_eq!(format_quantity(0.04, false), "0");
        assert_eq!(format_quantity(-0.04, false), "0");
        assert_eq!(format_quantity(-0.3, false), "-0.3");
    }

    #[test]
    fn test_common_fractions() {
        assert_eq!(format_quantity(0.75, true), "3/4");
        assert_eq!(format_quantity(1.5, true), "1 1/2");
        assert_eq!(format_quantity(0.125, true), "1/8");
        assert_eq!(format_quantity(0.2, true), "1/5");
        assert_eq!(format_quantity(2.6666, true), "2 2/3");
    }

    #[test]
    fn test_whole_numbers_have_no_fraction() {
        assert_eq!(format_quantity(2.0, true), "2");
        assert_eq!(format_quantity(0.0, true), "0");
        // 3/4 scaled by 1.33
        assert_eq!(format_quantity(0.9975, true), "1");
        assert_eq!(format_quantity(1.999, true), "2");
    }

    #[test]
    fn test_fraction_within_tolerance() {
        assert_eq!(format_quantity(0.333, true), "1/3");
        assert_eq!(format_quantity(0.666, true), "2/3");
    }

    #[test]
    fn test_no_matching_denominator_falls_back() {
        assert_eq!(format_quantity(0.4321, true), "0.4");
        // 1/10 is not a candidate
        assert_eq!(format_quantity(0.1, true), "0.1");
    }

    #[test]
    fn test_negative_fractions() {
        assert_eq!(format_quantity(-0.75, true), "-3/4");
        assert_eq!(format_quantity(-1.5, true), "-1 1/2");
        assert_eq!(format_quantity(-2.0, true), "-2");
    }

    #[test]
    fn test_smaller_denominator_preferred() {
        // 0.5 matches 2/4, 3/6, 4/8 too
        assert_eq!(format_quantity(0.5, true), "1/2");
        assert_eq!(nearest_fraction(0.5), Some((1.0, 2)));
    }

    #[test]
    fn test_non_finite_passes_through() {
        assert_eq!(format_quantity(f64::NAN, true), "NaN");
        assert_eq!(format_quantity(f64::INFINITY, false), "inf");
    }
}
