//! Conversions between SOL amounts and lamports.

use crate::constants::SOLANA_DECIMALS;

/// Renders a lamport amount as a SOL decimal string.
///
/// Uses integer arithmetic only, trailing zeros are trimmed:
/// `150_000_000` → `"0.15"`, `2_000_000_000` → `"2"`.
pub fn lamports_to_sol_string(lamports: u64) -> String {
    let decimals = SOLANA_DECIMALS as usize;
    let digits = format!("{:0>width$}", lamports, width = decimals + 1);
    let (whole, frac) = digits.split_at(digits.len() - decimals);

    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{frac}")
    }
}

/// Multiplies a unit count by a per-unit lamport price, rounding half up
/// to a whole lamport.
///
/// Returns `None` when the result is not a finite value representable as `u64`.
pub fn units_to_lamports(units: f64, unit_price_lamports: u64) -> Option<u64> {
    let total = units * unit_price_lamports as f64;
    if !total.is_finite() || total < 0.0 {
        return None;
    }

    // f64::round rounds half away from zero, i.e. half up for non-negative values.
    let rounded = total.round();
    if rounded >= u64::MAX as f64 {
        return None;
    }
    Some(rounded as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lamports_to_sol_string() {
        assert_eq!(lamports_to_sol_string(0), "0");
        assert_eq!(lamports_to_sol_string(1), "0.000000001");
        assert_eq!(lamports_to_sol_string(50_000_000), "0.05");
        assert_eq!(lamports_to_sol_string(150_000_000), "0.15");
        assert_eq!(lamports_to_sol_string(1_000_000_000), "1");
        assert_eq!(lamports_to_sol_string(12_345_000_000), "12.345");
    }

    #[test]
    fn test_units_to_lamports() {
        assert_eq!(units_to_lamports(3.0, 50_000_000), Some(150_000_000));
        assert_eq!(units_to_lamports(0.5, 50_000_000), Some(25_000_000));
        assert_eq!(units_to_lamports(1.0, 0), Some(0));
    }

    #[test]
    fn test_units_to_lamports_rounds_half_up() {
        // 0.00000005 * 50_000_000 = 2.5 lamports
        assert_eq!(units_to_lamports(0.5, 5), Some(3));
        assert_eq!(units_to_lamports(0.1, 5), Some(1));
        assert_eq!(units_to_lamports(0.09, 5), Some(0));
    }

    #[test]
    fn test_units_to_lamports_rejects_out_of_range() {
        assert_eq!(units_to_lamports(f64::INFINITY, 1), None);
        assert_eq!(units_to_lamports(f64::NAN, 1), None);
        assert_eq!(units_to_lamports(-1.0, 1), None);
        assert_eq!(units_to_lamports(1e30, 50_000_000), None);
    }

    proptest! {
        #[test]
        fn prop_whole_units_convert_exactly(units in 0u64..1_000_000u64) {
            let lamports = units_to_lamports(units as f64, 50_000_000).unwrap();
            prop_assert_eq!(lamports, units * 50_000_000);
        }

        #[test]
        fn prop_sol_string_parses_back(lamports in any::<u64>()) {
            let rendered = lamports_to_sol_string(lamports);
            let (whole, frac) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
            let frac_padded = format!("{:0<9}", frac);
            let reparsed = whole.parse::<u128>().unwrap() * 1_000_000_000
                + frac_padded.parse::<u128>().unwrap();
            prop_assert_eq!(reparsed, lamports as u128);
        }
    }
}
