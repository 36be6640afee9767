mod discount_tier;
mod estimates;
mod preset;
mod price_table;
mod quote_inputs;
mod quote_mode;
mod sponsorship;
mod support_role;

pub use discount_tier::{DiscountTier, TierTableError, default_discount_tiers, validate_tiers};
pub use estimates::{CombinedComparison, SponsoredEstimate, WholesaleEstimate};
pub use preset::{Preset, PresetSpec};
pub use price_table::PriceTable;
pub use quote_inputs::{AddOns, MAX_UNITS, QuoteInputs, UnitCounts, clamp_days, clamp_units};
pub use quote_mode::QuoteMode;
pub use sponsorship::SponsorshipAssumptions;
pub use support_role::SupportRole;
