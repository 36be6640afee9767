use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{AddOns, QuoteInputs, SupportRole, UnitCounts};

/// Named starting configurations offered in the quote builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Starter,
    Pro,
    Mega,
}

/// Values a preset applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetSpec {
    pub days: u32,
    pub staff_vip: u32,
    pub guests: u32,
    pub pre_plan: bool,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Self::Starter, Self::Pro, Self::Mega];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Pro => "pro",
            Self::Mega => "mega",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starter" => Some(Self::Starter),
            "pro" => Some(Self::Pro),
            "mega" => Some(Self::Mega),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Pro => "Pro",
            Self::Mega => "Mega",
        }
    }

    pub fn spec(&self) -> PresetSpec {
        match self {
            Self::Starter => PresetSpec {
                days: 4,
                staff_vip: 1,
                guests: 6,
                pre_plan: false,
            },
            Self::Pro => PresetSpec {
                days: 6,
                staff_vip: 2,
                guests: 12,
                pre_plan: true,
            },
            Self::Mega => PresetSpec {
                days: 8,
                staff_vip: 4,
                guests: 20,
                pre_plan: true,
            },
        }
    }

    /// Wholesale inputs for this preset.
    ///
    /// Presets with pre-planning also request every support role.
    pub fn inputs(&self) -> QuoteInputs {
        let spec = self.spec();
        let support: BTreeSet<SupportRole> = if spec.pre_plan {
            SupportRole::ALL.into_iter().collect()
        } else {
            BTreeSet::new()
        };

        QuoteInputs {
            units: UnitCounts::new(spec.staff_vip, spec.guests),
            days: spec.days,
            add_ons: AddOns {
                pre_plan: spec.pre_plan,
                support,
            },
        }
    }

    /// Expected bookings after applying this preset: at least twice the guest
    /// count, never lower than the current figure.
    pub fn expected_bookings(
        &self,
        current: i64,
    ) -> i64 {
        current.max(i64::from(self.spec().guests) * 2)
    }
}
