use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One step of the volume discount schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTier {
    /// Total units (Staff & VIP plus Guests) needed to reach this tier.
    pub min_units: u32,
    /// Fraction of the subtotal taken off, e.g. `0.10` for 10%.
    pub fraction: Decimal,
}

impl DiscountTier {
    pub fn new(
        min_units: u32,
        fraction: Decimal,
    ) -> Self {
        Self {
            min_units,
            fraction,
        }
    }
}

/// Errors raised when a tier table is not usable as a step schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TierTableError {
    /// A tier's fraction lies outside [0, 1]. `position` is 1-based, so it
    /// matches the data row of a CSV table.
    #[error("discount fraction {fraction} at tier {position} is outside [0, 1]")]
    FractionOutOfRange { position: usize, fraction: Decimal },

    /// Minimums must strictly increase. `position` is 1-based.
    #[error("tier {position} minimum {min_units} does not exceed the previous minimum {previous}")]
    NotAscending {
        position: usize,
        min_units: u32,
        previous: u32,
    },
}

/// The published schedule: 5% from 5 units, 10% from 10, 15% from 20.
pub fn default_discount_tiers() -> Vec<DiscountTier> {
    vec![
        DiscountTier::new(5, Decimal::new(5, 2)),
        DiscountTier::new(10, Decimal::new(10, 2)),
        DiscountTier::new(20, Decimal::new(15, 2)),
    ]
}

/// Checks that `tiers` is an ascending schedule of valid fractions.
///
/// An empty table is valid and means "no volume discount".
pub fn validate_tiers(tiers: &[DiscountTier]) -> Result<(), TierTableError> {
    let mut previous: Option<u32> = None;

    for (position, tier) in (1..).zip(tiers) {
        if tier.fraction < Decimal::ZERO || tier.fraction > Decimal::ONE {
            return Err(TierTableError::FractionOutOfRange {
                position,
                fraction: tier.fraction,
            });
        }
        if let Some(previous) = previous {
            if tier.min_units <= previous {
                return Err(TierTableError::NotAscending {
                    position,
                    min_units: tier.min_units,
                    previous,
                });
            }
        }
        previous = Some(tier.min_units);
    }

    Ok(())
}
