//! Common helpers shared by the estimate calculations.

use rust_decimal::Decimal;

/// Rounds a currency amount to cents using half-up rounding.
///
/// Estimates are computed unrounded; this is applied only for display.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps a fraction into [0, 1].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::clamp_fraction;
///
/// assert_eq!(clamp_fraction(dec!(1.2)), dec!(1));
/// assert_eq!(clamp_fraction(dec!(-0.5)), dec!(0));
/// assert_eq!(clamp_fraction(dec!(0.12)), dec!(0.12));
/// ```
pub fn clamp_fraction(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::ONE)
}
