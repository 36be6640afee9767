use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Who to send the formal quote to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Free-form event questionnaire answers. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDetails {
    pub event_name: Option<String>,
    pub dates: Option<String>,
    pub location: Option<String>,
    pub expected_attendance: Option<String>,
    pub load_in: Option<String>,
    pub load_out: Option<String>,
    pub power_water: Option<String>,
}

/// Reasons a lead is not ready to submit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadValidationError {
    #[error("please add your name and email so we can send the quote")]
    MissingContact,

    #[error("please enter a valid email address")]
    InvalidEmail,

    #[error("event days must be at least 1")]
    InvalidDays,
}

impl Contact {
    /// Loose check: the address must contain both `@` and `.`.
    pub fn email_looks_valid(&self) -> bool {
        self.email.contains('@') && self.email.contains('.')
    }
}

/// Checks that a lead carries enough to be followed up.
pub fn validate_lead(
    contact: &Contact,
    days: i64,
) -> Result<(), LeadValidationError> {
    if contact.name.trim().is_empty() || contact.email.trim().is_empty() {
        return Err(LeadValidationError::MissingContact);
    }
    if !contact.email_looks_valid() {
        return Err(LeadValidationError::InvalidEmail);
    }
    if days < 1 {
        return Err(LeadValidationError::InvalidDays);
    }
    Ok(())
}
