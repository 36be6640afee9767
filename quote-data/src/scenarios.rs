//! Loader for batches of quote scenarios.
//!
//! ## CSV Format
//!
//! Headers are matched by name; column order does not matter. Blank optional
//! cells take the [`ScenarioLoader`] defaults.
//!
//! | Column              | Required | Type    | Notes                                      |
//! |---------------------|----------|---------|--------------------------------------------|
//! | `label`             | yes      | string  | Shown next to the results                  |
//! | `staff_vip`         | yes      | integer | Clamped to `0..=999`                       |
//! | `guests`            | yes      | integer | Clamped to `0..=999`                       |
//! | `days`              | yes      | integer | Clamped to at least 1                      |
//! | `pre_plan`          | yes      | bool    | `true` / `false`                           |
//! | `expected_bookings` | no       | integer | Blank: default, raised to at least `guests`|
//! | `avg_rate`          | no       | decimal | Per RV per day                             |
//! | `sponsorship_pct`   | no       | decimal | Whole percent, e.g. `12` for 12%           |
//! | `ops_cost`          | no       | decimal | Per RV per day                             |
//! | `mode`              | no       | string  | `wholesale`, `revshare` or `both` (default)|
//!
//! ```csv
//! label,staff_vip,guests,days,pre_plan,expected_bookings,avg_rate,sponsorship_pct,ops_cost,mode
//! Regional festival,5,5,1,false,10,173,10,200,both
//! Small meetup,1,0,2,false,,,,,wholesale
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quote_core::{QuoteInputs, QuoteMode, SponsorshipAssumptions};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ScenarioRow {
    label: String,
    staff_vip: i64,
    guests: i64,
    days: i64,
    pre_plan: bool,
    expected_bookings: Option<i64>,
    avg_rate: Option<Decimal>,
    sponsorship_pct: Option<Decimal>,
    ops_cost: Option<Decimal>,
    mode: Option<String>,
}

/// Errors that can occur while loading scenarios.
#[derive(Debug, Error)]
pub enum ScenarioLoadError {
    #[error("could not open scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based (header = row 0).
    #[error("unrecognised mode '{mode}' on row {row}")]
    InvalidMode { mode: String, row: usize },
}

/// One row of a scenario batch, clamped and ready for the estimator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub label: String,
    pub mode: QuoteMode,
    pub inputs: QuoteInputs,
    pub assumptions: SponsorshipAssumptions,
}

fn convert_row(
    row: ScenarioRow,
    row_number: usize,
    defaults: &SponsorshipAssumptions,
) -> Result<Scenario, ScenarioLoadError> {
    let mode = match row.mode.as_deref().map(str::trim) {
        None | Some("") => QuoteMode::default(),
        Some(raw) => {
            QuoteMode::parse(raw).ok_or_else(|| ScenarioLoadError::InvalidMode {
                mode: raw.to_string(),
                row: row_number,
            })?
        }
    };

    let inputs = QuoteInputs::from_raw(row.staff_vip, row.guests, row.days, row.pre_plan);
    // A blank bookings column follows the guest count, as the quote builder does
    let expected_bookings = row.expected_bookings.unwrap_or_else(|| {
        defaults
            .expected_bookings
            .max(i64::from(inputs.units.guests))
    });
    let assumptions = SponsorshipAssumptions {
        expected_bookings,
        days: i64::from(inputs.days),
        avg_rate: row.avg_rate.unwrap_or(defaults.avg_rate),
        sponsorship_fraction: row
            .sponsorship_pct
            .map_or(defaults.sponsorship_fraction, |pct| pct / Decimal::ONE_HUNDRED),
        ops_cost_per_unit_per_day: row.ops_cost.unwrap_or(defaults.ops_cost_per_unit_per_day),
    };

    Ok(Scenario {
        label: row.label,
        mode,
        inputs,
        assumptions,
    })
}

/// Reads scenario batches from CSV.
///
/// Blank optional columns take their value from the loader's sponsorship
/// defaults; `days` in the defaults is ignored.
#[derive(Debug, Clone, Default)]
pub struct ScenarioLoader {
    defaults: SponsorshipAssumptions,
}

impl ScenarioLoader {
    pub fn new(defaults: SponsorshipAssumptions) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &SponsorshipAssumptions {
        &self.defaults
    }

    /// Parse every scenario from a reader, stopping at the first bad row.
    pub fn parse<R: Read>(
        &self,
        reader: R,
    ) -> Result<Vec<Scenario>, ScenarioLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut scenarios = Vec::new();

        for (index, result) in csv_reader.deserialize::<ScenarioRow>().enumerate() {
            let row = result?;
            scenarios.push(convert_row(row, index + 1, &self.defaults)?);
        }

        debug!(count = scenarios.len(), "parsed quote scenarios");
        Ok(scenarios)
    }

    /// Open `path` and parse it as a scenario batch.
    pub fn load_from_file(
        &self,
        path: &Path,
    ) -> Result<Vec<Scenario>, ScenarioLoadError> {
        let file = File::open(path)?;
        self.parse(file)
    }
}
