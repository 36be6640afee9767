//! CSV inputs for the quote estimator: discount tier tables and batches of
//! quote scenarios.

pub mod scenarios;
pub mod tiers;

pub use scenarios::{Scenario, ScenarioLoadError, ScenarioLoader};
pub use tiers::{DiscountTierLoader, TierLoadError};
