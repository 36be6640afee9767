//! Wholesale, sponsored and combined estimates.

pub mod comparison;
pub mod quote;
pub mod sponsored;
pub mod wholesale;

pub use comparison::compute_comparison;
pub use quote::{Estimator, QuoteEstimate};
pub use sponsored::compute_sponsored;
pub use wholesale::{compute_wholesale, select_discount_fraction};
