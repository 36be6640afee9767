use serde::{Deserialize, Serialize};

/// Which pricing model the organizer is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteMode {
    /// Event-hosted: the organizer pre-purchases units outright.
    Wholesale,
    /// Operator-sponsored bookings paying the organizer a share of gross.
    #[serde(rename = "revshare")]
    Sponsored,
    /// Show both models side by side.
    #[default]
    Both,
}

impl QuoteMode {
    pub const ALL: [QuoteMode; 3] = [Self::Wholesale, Self::Sponsored, Self::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wholesale => "wholesale",
            Self::Sponsored => "revshare",
            Self::Both => "both",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wholesale" | "event-hosted" => Some(Self::Wholesale),
            "revshare" | "sponsored" => Some(Self::Sponsored),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Wholesale => "Event-Hosted",
            Self::Sponsored => "RVEEDOM-Sponsored",
            Self::Both => "Compare Both",
        }
    }

    /// Program name reported in lead payloads.
    pub fn program(&self) -> &'static str {
        match self {
            Self::Sponsored => "rveedom_sponsored",
            Self::Wholesale | Self::Both => "event_hosted",
        }
    }

    /// Volume discounts only apply when the event-hosted model is in play.
    pub fn applies_volume_discount(&self) -> bool {
        !matches!(self, Self::Sponsored)
    }
}
