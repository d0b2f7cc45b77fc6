//! Monetary amounts as exact decimals.

use bigdecimal::{BigDecimal, RoundingMode};

/// Formats an amount with exactly two fractional digits and a `.` separator.
///
/// Midpoints round away from zero, so `19.505` becomes `"19.51"`. The output
/// never depends on the host locale and never uses scientific notation.
pub fn format_two_decimals(amount: &BigDecimal) -> String {
    amount
        .with_scale_round(2, RoundingMode::HalfUp)
        .to_plain_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn pads_to_two_decimals() {
        assert_eq!(format_two_decimals(&dec("19.5")), "19.50");
        assert_eq!(format_two_decimals(&dec("7")), "7.00");
        assert_eq!(format_two_decimals(&dec("0")), "0.00");
    }

    #[test]
    fn rounds_midpoint_away_from_zero() {
        assert_eq!(format_two_decimals(&dec("19.505")), "19.51");
        assert_eq!(format_two_decimals(&dec("2.125")), "2.13");
        assert_eq!(format_two_decimals(&dec("2.1249")), "2.12");
    }

    #[test]
    fn keeps_large_amounts_in_plain_notation() {
        assert_eq!(format_two_decimals(&dec("1E+6")), "1000000.00");
        assert_eq!(format_two_decimals(&dec("123456789.1")), "123456789.10");
    }
}
