//! Rounding and ratio helpers shared by the calculation code.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 round away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2009.615)), dec!(2009.62));
/// assert_eq!(round_half_up(dec!(2009.614)), dec!(2009.61));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Expresses `part` as a percentage of `whole`.
///
/// A zero `whole` yields zero instead of dividing.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::percentage_of;
///
/// assert_eq!(percentage_of(dec!(25), dec!(200)), dec!(12.5));
/// assert_eq!(percentage_of(dec!(0), dec!(0)), dec!(0));
/// ```
pub fn percentage_of(
    part: Decimal,
    whole: Decimal,
) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part / whole * Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(7529.554)), dec!(7529.55));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(9539.165)), dec!(9539.17));
    }

    #[test]
    fn round_half_up_handles_negative_midpoint() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
    }

    #[test]
    fn round_half_up_leaves_short_values_alone() {
        assert_eq!(round_half_up(dec!(0)), dec!(0));
        assert_eq!(round_half_up(dec!(7529.5)), dec!(7529.5));
    }

    // =========================================================================
    // percentage_of tests
    // =========================================================================

    #[test]
    fn percentage_of_scales_by_one_hundred() {
        let result = percentage_of(dec!(9539.165), dec!(60000));

        assert_eq!(round_half_up(result), dec!(15.90));
    }

    #[test]
    fn percentage_of_zero_whole_is_zero() {
        assert_eq!(percentage_of(dec!(100), dec!(0)), Decimal::ZERO);
    }
}
