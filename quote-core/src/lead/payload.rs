//! Wire format of a quote request.
//!
//! The lead endpoint expects money as JSON numbers and support roles as a
//! map of flags, so the payload carries its own serde shapes rather than the
//! estimator's models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Contact, EventDetails};
use crate::{
    QuoteEstimate, QuoteInputs, QuoteMode, SponsoredEstimate, SupportRole, WholesaleEstimate,
};

/// Identifies where leads come from.
pub const LEAD_SOURCE: &str = "RVEEDOM Events — Organizer Page";

/// Which support roles were requested, one flag per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SupportFlags {
    pub tech: bool,
    pub concierge: bool,
    pub cleaning: bool,
}

impl SupportFlags {
    pub fn is_set(
        &self,
        role: SupportRole,
    ) -> bool {
        match role {
            SupportRole::Technician => self.tech,
            SupportRole::Concierge => self.concierge,
            SupportRole::Cleaning => self.cleaning,
        }
    }
}

impl<'a> FromIterator<&'a SupportRole> for SupportFlags {
    fn from_iter<I: IntoIterator<Item = &'a SupportRole>>(roles: I) -> Self {
        let mut flags = Self::default();
        for role in roles {
            match role {
                SupportRole::Technician => flags.tech = true,
                SupportRole::Concierge => flags.concierge = true,
                SupportRole::Cleaning => flags.cleaning = true,
            }
        }
        flags
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnSelection {
    pub pre_plan: bool,
    pub support: SupportFlags,
}

/// The `selectionsV2` block: what the organizer asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selections {
    pub staff_vip: u32,
    pub guests: u32,
    pub days: u32,
    pub add_ons: AddOnSelection,
}

impl From<&QuoteInputs> for Selections {
    fn from(inputs: &QuoteInputs) -> Self {
        Self {
            staff_vip: inputs.units.staff_vip,
            guests: inputs.units.guests,
            days: inputs.days,
            add_ons: AddOnSelection {
                pre_plan: inputs.add_ons.pre_plan,
                support: inputs.add_ons.support.iter().collect(),
            },
        }
    }
}

/// Event-hosted figures as sent to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WholesaleFigures {
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// Discount amount, not the fraction.
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost: Decimal,
}

impl From<&WholesaleEstimate> for WholesaleFigures {
    fn from(estimate: &WholesaleEstimate) -> Self {
        Self {
            subtotal: estimate.subtotal,
            discount: estimate.discount_amount,
            cost: estimate.cost,
        }
    }
}

/// Sponsored figures as sent to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsoredFigures {
    #[serde(with = "rust_decimal::serde::float")]
    pub gross: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub payout: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub ops_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net: Decimal,
}

impl From<&SponsoredEstimate> for SponsoredFigures {
    fn from(estimate: &SponsoredEstimate) -> Self {
        Self {
            gross: estimate.gross,
            payout: estimate.payout,
            ops_cost: estimate.ops_cost,
            net: estimate.net,
        }
    }
}

/// Body posted to the lead endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub contact: Contact,
    /// `event_hosted` or `rveedom_sponsored`.
    pub program: String,
    pub compare_both: bool,
    #[serde(rename = "selectionsV2")]
    pub selections: Selections,
    pub wholesale: WholesaleFigures,
    pub sponsored: SponsoredFigures,
    pub notes: String,
    pub event_details: EventDetails,
    /// Inbox that should receive the lead.
    pub notify: String,
}

impl LeadPayload {
    /// Snapshots the current inputs and estimate into a payload.
    pub fn from_quote(
        contact: Contact,
        inputs: &QuoteInputs,
        quote: &QuoteEstimate,
        notes: String,
        event_details: EventDetails,
        notify: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            source: LEAD_SOURCE.to_string(),
            created_at,
            contact,
            program: quote.mode.program().to_string(),
            compare_both: quote.mode == QuoteMode::Both,
            selections: Selections::from(inputs),
            wholesale: WholesaleFigures::from(&quote.wholesale),
            sponsored: SponsoredFigures::from(&quote.sponsored),
            notes,
            event_details,
            notify: notify.into(),
        }
    }
}
