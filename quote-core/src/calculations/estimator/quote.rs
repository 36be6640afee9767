use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{compute_comparison, compute_sponsored, compute_wholesale};
use crate::{
    CombinedComparison, DiscountTier, PriceTable, QuoteInputs, QuoteMode, SponsoredEstimate,
    SponsorshipAssumptions, WholesaleEstimate,
};

/// Every figure shown by the quote builder for one set of inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteEstimate {
    pub mode: QuoteMode,
    pub wholesale: WholesaleEstimate,
    pub sponsored: SponsoredEstimate,
    pub combined: CombinedComparison,
}

/// Runs the three estimate functions against a fixed price table and tier
/// schedule.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::{
///     Estimator, PriceTable, QuoteInputs, QuoteMode, SponsorshipAssumptions,
///     default_discount_tiers,
/// };
///
/// let prices = PriceTable::default();
/// let tiers = default_discount_tiers();
/// let estimator = Estimator::new(&prices, &tiers);
///
/// let quote = estimator.estimate(
///     &QuoteInputs::from_raw(5, 5, 1, false),
///     &SponsorshipAssumptions::default(),
///     QuoteMode::Both,
/// );
///
/// assert_eq!(quote.wholesale.cost, dec!(1557));
/// ```
#[derive(Debug, Clone)]
pub struct Estimator<'a> {
    price_table: &'a PriceTable,
    discount_tiers: &'a [DiscountTier],
}

impl<'a> Estimator<'a> {
    /// Tiers should be sorted by `min_units` ascending.
    pub fn new(
        price_table: &'a PriceTable,
        discount_tiers: &'a [DiscountTier],
    ) -> Self {
        Self {
            price_table,
            discount_tiers,
        }
    }

    pub fn price_table(&self) -> &PriceTable {
        self.price_table
    }

    pub fn discount_tiers(&self) -> &[DiscountTier] {
        self.discount_tiers
    }

    /// Wholesale figures; no volume discount in sponsored-only mode.
    pub fn wholesale(
        &self,
        inputs: &QuoteInputs,
        mode: QuoteMode,
    ) -> WholesaleEstimate {
        let tiers: &[DiscountTier] = if mode.applies_volume_discount() {
            self.discount_tiers
        } else {
            &[]
        };

        compute_wholesale(
            &inputs.units,
            inputs.days,
            &inputs.add_ons,
            self.price_table,
            tiers,
        )
    }

    /// Computes every figure for the current inputs.
    pub fn estimate(
        &self,
        inputs: &QuoteInputs,
        assumptions: &SponsorshipAssumptions,
        mode: QuoteMode,
    ) -> QuoteEstimate {
        let wholesale = self.wholesale(inputs, mode);
        let sponsored = compute_sponsored(assumptions);
        let combined = compute_comparison(&wholesale, &sponsored);

        debug!(
            mode = mode.as_str(),
            units = inputs.units.total(),
            days = inputs.days,
            cost = %wholesale.cost,
            payout = %sponsored.payout,
            net = %combined.net,
            "estimate recomputed"
        );

        QuoteEstimate {
            mode,
            wholesale,
            sponsored,
            combined,
        }
    }
}
