//! Loader for volume discount tier tables.
//!
//! ## CSV Format
//!
//! | Column         | Type    | Notes                               |
//! |----------------|---------|-------------------------------------|
//! | `min_units`    | integer | Total units needed for the tier     |
//! | `discount_pct` | decimal | Fraction of subtotal, e.g. `0.10`   |
//!
//! Rows must be in strictly ascending `min_units` order and every fraction
//! must lie in [0, 1].
//!
//! ```csv
//! min_units,discount_pct
//! 5,0.05
//! 10,0.10
//! 20,0.15
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quote_core::{DiscountTier, TierTableError, validate_tiers};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a tier table.
#[derive(Debug, Error)]
pub enum TierLoadError {
    #[error("could not open tier file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("invalid tier table: {0}")]
    Invalid(#[from] TierTableError),
}

#[derive(Debug, Deserialize)]
struct TierRecord {
    min_units: u32,
    discount_pct: Decimal,
}

/// Reads discount tier tables from CSV.
pub struct DiscountTierLoader;

impl DiscountTierLoader {
    /// Parse and validate tiers from any reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<DiscountTier>, TierLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut tiers = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TierRecord = result?;
            tiers.push(DiscountTier::new(record.min_units, record.discount_pct));
        }

        validate_tiers(&tiers)?;
        debug!(count = tiers.len(), "parsed discount tiers");

        Ok(tiers)
    }

    /// Open `path` and parse it as a tier table.
    pub fn load_from_file(path: &Path) -> Result<Vec<DiscountTier>, TierLoadError> {
        let file = File::open(path)?;
        Self::parse(file)
    }
}
