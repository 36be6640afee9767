//! Estimate calculations for event RV placements.
//!
//! Everything here is a pure function of its inputs. Callers recompute on
//! every input change and decide for themselves whether to memoize.

pub mod common;
pub mod estimator;

pub use estimator::{
    Estimator, QuoteEstimate, compute_comparison, compute_sponsored, compute_wholesale,
    select_discount_fraction,
};
