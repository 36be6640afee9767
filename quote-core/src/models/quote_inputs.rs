use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::SupportRole;

/// Largest unit count accepted for either unit kind.
pub const MAX_UNITS: u32 = 999;

/// Clamps a raw unit count into `0..=MAX_UNITS`.
pub fn clamp_units(raw: i64) -> u32 {
    raw.clamp(0, i64::from(MAX_UNITS)) as u32
}

/// Clamps a raw day count to at least one day.
pub fn clamp_days(raw: i64) -> u32 {
    raw.clamp(1, i64::from(u32::MAX)) as u32
}

/// Units requested per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitCounts {
    pub staff_vip: u32,
    pub guests: u32,
}

impl UnitCounts {
    pub fn new(
        staff_vip: u32,
        guests: u32,
    ) -> Self {
        Self { staff_vip, guests }
    }

    /// Total units used for tier selection.
    pub fn total(&self) -> u32 {
        self.staff_vip.saturating_add(self.guests)
    }
}

/// Optional extras attached to a quote.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOns {
    /// Flat-priced pre-planning package.
    pub pre_plan: bool,
    /// Requested support roles. Informational only, never priced.
    #[serde(default)]
    pub support: BTreeSet<SupportRole>,
}

impl AddOns {
    pub fn with_pre_plan(pre_plan: bool) -> Self {
        Self {
            pre_plan,
            support: BTreeSet::new(),
        }
    }
}

/// Inputs to the wholesale estimate, already clamped to their domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInputs {
    #[serde(flatten)]
    pub units: UnitCounts,
    pub days: u32,
    pub add_ons: AddOns,
}

impl QuoteInputs {
    /// Builds inputs from unvalidated values, clamping each one.
    pub fn from_raw(
        staff_vip: i64,
        guests: i64,
        days: i64,
        pre_plan: bool,
    ) -> Self {
        Self {
            units: UnitCounts::new(clamp_units(staff_vip), clamp_units(guests)),
            days: clamp_days(days),
            add_ons: AddOns::with_pre_plan(pre_plan),
        }
    }
}

impl Default for QuoteInputs {
    fn default() -> Self {
        Self {
            units: UnitCounts::new(1, 6),
            days: 4,
            add_ons: AddOns::default(),
        }
    }
}
