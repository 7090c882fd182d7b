//! Fixed-precision monetary arithmetic and rounding policy.
//!
//! All monetary values are [`rust_decimal::Decimal`] — never floating point.
//! Every derived monetary field is rounded exactly once, to two decimal
//! places, half away from zero (commercial rounding). Rounding is never
//! compounded across intermediate sub-steps.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Number of fraction digits carried by every monetary value.
pub const MONEY_DP: u32 = 2;

/// Round a monetary value to [`MONEY_DP`] places, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// `percentage` percent of `base`, rounded once to money precision.
///
/// A zero base yields zero regardless of the percentage.
pub fn percent_of(base: Decimal, percentage: Decimal) -> Decimal {
    if base.is_zero() {
        return Decimal::ZERO;
    }
    round_money(base * percentage / dec!(100))
}

/// Whether `percentage` lies in the valid [0, 100] range.
///
/// Out-of-range percentages are a validation error, never silently clamped.
pub fn percentage_in_range(percentage: Decimal) -> bool {
    !percentage.is_sign_negative() && percentage <= dec!(100)
}
