use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Assumptions behind the sponsored (revenue share) projection.
///
/// Values are not pre-clamped: bookings and rates below zero, days below one
/// and fractions outside [0, 1] are tolerated and clamped by the estimator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorshipAssumptions {
    /// Attendee bookings expected through the operator.
    pub expected_bookings: i64,
    /// Event days; shared with the wholesale inputs.
    pub days: i64,
    /// Average nightly rate per RV.
    pub avg_rate: Decimal,
    /// Share of gross paid back to the organizer.
    pub sponsorship_fraction: Decimal,
    /// Operating cost per RV per day.
    pub ops_cost_per_unit_per_day: Decimal,
}

impl Default for SponsorshipAssumptions {
    fn default() -> Self {
        Self {
            expected_bookings: 24,
            days: 4,
            avg_rate: Decimal::from(173),
            sponsorship_fraction: Decimal::new(12, 2),
            ops_cost_per_unit_per_day: Decimal::from(200),
        }
    }
}
