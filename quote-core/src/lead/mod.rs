//! Lead capture: contact details, the submission payload and the
//! submission contract.
//!
//! Submission is fallible; what to do on failure is left to the caller.

mod contact;
mod payload;
mod submitter;

pub use contact::{Contact, EventDetails, LeadValidationError, validate_lead};
pub use payload::{
    AddOnSelection, LEAD_SOURCE, LeadPayload, Selections, SponsoredFigures, SupportFlags,
    WholesaleFigures,
};
pub use submitter::{LeadSubmitter, SubmissionError};
