//! Prices

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Errors converting a decimal amount into minor currency units.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MinorUnitsError {
    /// The amount does not fit in a signed 64-bit count of minor units.
    #[error("amount {0} overflows minor currency units")]
    Overflow(Decimal),
}

/// Converts a major-unit decimal amount into minor currency units, e.g.
/// `24.98` into `2498`, rounding half away from zero at the second decimal
/// place.
///
/// # Errors
///
/// Returns [`MinorUnitsError::Overflow`] when the scaled amount does not
/// fit in an `i64`.
pub fn to_minor_units(amount: Decimal) -> Result<i64, MinorUnitsError> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_i64())
        .ok_or(MinorUnitsError::Overflow(amount))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn whole_amounts_scale_by_one_hundred() -> TestResult {
        assert_eq!(to_minor_units(Decimal::new(5, 0))?, 500);

        Ok(())
    }

    #[test]
    fn two_decimal_amounts_convert_exactly() -> TestResult {
        assert_eq!(to_minor_units(Decimal::new(2498, 2))?, 2498);
        assert_eq!(to_minor_units(Decimal::new(999, 2))?, 999);

        Ok(())
    }

    #[test]
    fn sub_cent_amounts_round_half_away_from_zero() -> TestResult {
        assert_eq!(to_minor_units(Decimal::new(10005, 4))?, 100);
        assert_eq!(to_minor_units(Decimal::new(9995, 4))?, 100);

        Ok(())
    }

    #[test]
    fn zero_is_zero() -> TestResult {
        assert_eq!(to_minor_units(Decimal::ZERO)?, 0);

        Ok(())
    }

    #[test]
    fn overflow_is_reported() {
        let result = to_minor_units(Decimal::MAX);

        assert_eq!(result, Err(MinorUnitsError::Overflow(Decimal::MAX)));
    }
}
