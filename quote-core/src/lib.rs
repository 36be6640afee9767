pub mod calculations;
pub mod lead;
pub mod models;

pub use calculations::{Estimator, QuoteEstimate};
pub use lead::{LeadSubmitter, SubmissionError};
pub use models::*;
