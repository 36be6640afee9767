//! Event-hosted (wholesale) cost.
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Line base: (Staff & VIP × price + Guests × price) × days |
//! | 2    | Add-on base: pre-plan flat price when selected |
//! | 3    | Subtotal: line base + add-on base |
//! | 4    | Discount: subtotal × highest satisfied tier fraction |
//! | 5    | Cost: subtotal − discount, minimum 0 |
//!
//! Support roles are carried on [`AddOns`] but never contribute to the total.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use quote_core::calculations::compute_wholesale;
//! use quote_core::{AddOns, PriceTable, UnitCounts, default_discount_tiers};
//!
//! let estimate = compute_wholesale(
//!     &UnitCounts::new(5, 5),
//!     1,
//!     &AddOns::default(),
//!     &PriceTable::default(),
//!     &default_discount_tiers(),
//! );
//!
//! assert_eq!(estimate.subtotal, dec!(1730));
//! assert_eq!(estimate.discount_amount, dec!(173));
//! assert_eq!(estimate.cost, dec!(1557));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::max;
use crate::{AddOns, DiscountTier, PriceTable, UnitCounts, WholesaleEstimate};

/// Returns the fraction of the highest tier whose minimum is met.
///
/// Equivalent to walking an ascending schedule and keeping the last tier
/// satisfied. Returns zero when no tier is reached.
pub fn select_discount_fraction(
    tiers: &[DiscountTier],
    total_units: u32,
) -> Decimal {
    tiers
        .iter()
        .filter(|tier| tier.min_units <= total_units)
        .max_by_key(|tier| tier.min_units)
        .map_or(Decimal::ZERO, |tier| tier.fraction)
}

/// Computes the wholesale estimate.
///
/// Inputs are expected to be clamped already (see
/// [`QuoteInputs::from_raw`](crate::QuoteInputs::from_raw)); no validation
/// happens here. Totals saturate at [`Decimal::MAX`] rather than overflow.
pub fn compute_wholesale(
    units: &UnitCounts,
    days: u32,
    add_ons: &AddOns,
    price_table: &PriceTable,
    discount_tiers: &[DiscountTier],
) -> WholesaleEstimate {
    let per_day = Decimal::from(units.staff_vip)
        .saturating_mul(price_table.staff_vip)
        .saturating_add(Decimal::from(units.guests).saturating_mul(price_table.guests));
    let line_base = per_day.saturating_mul(Decimal::from(days));
    let add_on_base = if add_ons.pre_plan {
        price_table.pre_plan
    } else {
        Decimal::ZERO
    };
    let subtotal = line_base.saturating_add(add_on_base);

    let discount_fraction = select_discount_fraction(discount_tiers, units.total());
    let discount_amount = subtotal * discount_fraction;
    let cost = max(subtotal.saturating_sub(discount_amount), Decimal::ZERO);

    WholesaleEstimate {
        subtotal,
        discount_fraction,
        discount_amount,
        cost,
    }
}
