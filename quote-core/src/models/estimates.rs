use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Event-hosted (pre-purchase) cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WholesaleEstimate {
    /// Units times days times price, plus flat add-ons.
    pub subtotal: Decimal,
    /// Volume discount fraction that was applied (0 when no tier matched).
    pub discount_fraction: Decimal,
    pub discount_amount: Decimal,
    /// Subtotal minus discount, never below zero.
    pub cost: Decimal,
}

/// Sponsored (revenue share) projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsoredEstimate {
    pub gross: Decimal,
    /// Organizer's share of gross.
    pub payout: Decimal,
    pub ops_cost: Decimal,
    /// Payout minus ops cost. Negative values signal a projected loss.
    pub net: Decimal,
}

/// Sponsored payout set against the wholesale cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedComparison {
    pub net: Decimal,
    /// `net / cost`, or zero when there is no cost basis.
    pub roi: Decimal,
}
