//! Sponsored (revenue share) projection.
//!
//! Unlike the wholesale estimate, this function clamps its own inputs so it
//! is safe against out-of-range values. Products saturate at
//! [`Decimal::MAX`] instead of overflowing.

use rust_decimal::Decimal;

use crate::calculations::common::{clamp_fraction, max};
use crate::{SponsoredEstimate, SponsorshipAssumptions};

/// Computes gross bookings revenue, the organizer payout, operating cost and
/// the resulting net.
///
/// Bookings and rates are floored at zero, days at one, and the sponsorship
/// fraction is clamped into [0, 1]. `net` may be negative.
pub fn compute_sponsored(assumptions: &SponsorshipAssumptions) -> SponsoredEstimate {
    let bookings = Decimal::from(assumptions.expected_bookings.max(0));
    let days = Decimal::from(assumptions.days.max(1));
    let unit_days = bookings.saturating_mul(days);

    let gross = unit_days.saturating_mul(max(assumptions.avg_rate, Decimal::ZERO));
    let payout = gross * clamp_fraction(assumptions.sponsorship_fraction);
    let ops_cost =
        unit_days.saturating_mul(max(assumptions.ops_cost_per_unit_per_day, Decimal::ZERO));
    let net = payout.saturating_sub(ops_cost);

    SponsoredEstimate {
        gross,
        payout,
        ops_cost,
        net,
    }
}
