use rust_decimal::Decimal;

use crate::{CombinedComparison, SponsoredEstimate, WholesaleEstimate};

/// Sets the sponsored payout against the wholesale cost.
///
/// ROI is `net / cost`; with no cost basis it is reported as zero. A ratio
/// too large to represent saturates.
pub fn compute_comparison(
    wholesale: &WholesaleEstimate,
    sponsored: &SponsoredEstimate,
) -> CombinedComparison {
    let net = sponsored.payout.saturating_sub(wholesale.cost);
    let roi = if wholesale.cost > Decimal::ZERO {
        net.checked_div(wholesale.cost).unwrap_or(if net.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
    } else {
        Decimal::ZERO
    };

    CombinedComparison { net, roi }
}
