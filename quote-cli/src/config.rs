//! TOML configuration for the quote CLI.
//!
//! Every section is optional; anything left out falls back to the published
//! pricing and the default lead endpoint.
//!
//! ```toml
//! [pricing]
//! staff_vip = "173"
//! guests = "173"
//! pre_plan = "2500"
//!
//! [[discount_tiers]]
//! min_units = 5
//! fraction = "0.05"
//!
//! [sponsorship]
//! expected_bookings = 24
//! avg_rate = "173"
//! sponsorship_pct = "0.12"
//! ops_cost = "200"
//!
//! [lead]
//! endpoint = "http://localhost:3000/api/rveedom/events-lead"
//! notify_email = "bookings@rveedom.com"
//! timeout_secs = 10
//! draft_dir = "."
//! ```

use std::path::{Path, PathBuf};

use quote_core::{DiscountTier, PriceTable, TierTableError, default_discount_tiers, validate_tiers};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid discount tiers: {0}")]
    Tiers(#[from] TierTableError),
}

/// Starting values for the sponsored assumptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SponsorshipDefaults {
    pub expected_bookings: i64,
    pub avg_rate: Decimal,
    /// Fraction in [0, 1].
    pub sponsorship_pct: Decimal,
    pub ops_cost: Decimal,
}

impl Default for SponsorshipDefaults {
    fn default() -> Self {
        Self {
            expected_bookings: 24,
            avg_rate: Decimal::from(173),
            sponsorship_pct: Decimal::new(12, 2),
            ops_cost: Decimal::from(200),
        }
    }
}

/// Where and how leads are delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadConfig {
    pub endpoint: String,
    pub notify_email: String,
    pub timeout_secs: u64,
    /// Directory that receives draft files when submission fails.
    pub draft_dir: PathBuf,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3000/api/rveedom/events-lead".to_string(),
            notify_email: "bookings@rveedom.com".to_string(),
            timeout_secs: 10,
            draft_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pricing: PriceTable,
    pub discount_tiers: Vec<DiscountTier>,
    pub sponsorship: SponsorshipDefaults,
    pub lead: LeadConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pricing: PriceTable::default(),
            discount_tiers: default_discount_tiers(),
            sponsorship: SponsorshipDefaults::default(),
            lead: LeadConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parses and validates configuration text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        validate_tiers(&config.discount_tiers)?;
        Ok(config)
    }

    /// Loads `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&text)
    }
}
