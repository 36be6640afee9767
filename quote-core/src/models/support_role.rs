use serde::{Deserialize, Serialize};

/// Premium on-site support that can be requested alongside a quote.
///
/// Support roles are never priced in an estimate; they are carried through to
/// the lead so the formal quote can include them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportRole {
    #[serde(rename = "tech")]
    Technician,
    Concierge,
    Cleaning,
}

impl SupportRole {
    pub const ALL: [SupportRole; 3] = [Self::Technician, Self::Concierge, Self::Cleaning];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technician => "tech",
            Self::Concierge => "concierge",
            Self::Cleaning => "cleaning",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "tech" => Some(Self::Technician),
            "concierge" => Some(Self::Concierge),
            "cleaning" => Some(Self::Cleaning),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Technician => "On-site RV Technician",
            Self::Concierge => "Host / Concierge",
            Self::Cleaning => "Maintenance & Cleaning",
        }
    }
}
