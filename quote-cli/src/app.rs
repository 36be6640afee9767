//! Command implementations.
//!
//! Each command returns the text to print so that `main` stays a thin
//! dispatcher and the commands can be exercised from tests.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use quote_core::lead::{LeadPayload, validate_lead};
use quote_core::{Estimator, LeadSubmitter, Preset, QuoteEstimate, QuoteMode};
use quote_data::{DiscountTierLoader, ScenarioLoader};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{LeadArgs, QuoteArgs};
use crate::config::AppConfig;
use crate::contact_store::ContactStore;
use crate::lead_client::HttpLeadSubmitter;
use crate::report::QuoteReport;
use crate::state::QuoteSession;
use crate::utils::{format_currency, format_percent};

/// Loads configuration, replacing its tiers with a CSV table when given.
pub fn load_config(
    config_path: Option<&Path>,
    tiers_path: Option<&Path>,
) -> Result<AppConfig> {
    let mut config = AppConfig::load(config_path).context("Failed to load configuration")?;

    if let Some(path) = tiers_path {
        config.discount_tiers = DiscountTierLoader::load_from_file(path)
            .with_context(|| format!("Failed to load discount tiers: {}", path.display()))?;
        info!(count = config.discount_tiers.len(), "using discount tiers from CSV");
    }

    Ok(config)
}

/// Session seeded from configuration with the command-line inputs applied.
pub fn build_session(
    config: &AppConfig,
    args: &QuoteArgs,
) -> QuoteSession {
    let mut session = QuoteSession::new(&config.sponsorship);
    args.apply(&mut session);
    session
}

pub fn run_estimate(
    config: &AppConfig,
    args: &QuoteArgs,
    json: bool,
) -> Result<String> {
    let estimator = Estimator::new(&config.pricing, &config.discount_tiers);
    let session = build_session(config, args);
    let quote = session.estimate(&estimator);

    if json {
        return serde_json::to_string_pretty(&quote).context("Failed to encode estimate");
    }
    Ok(QuoteReport::new(&session, &quote).to_string())
}

/// One line per preset with its inputs and event-hosted cost.
pub fn list_presets(config: &AppConfig) -> String {
    let estimator = Estimator::new(&config.pricing, &config.discount_tiers);
    let mut out = String::new();

    for preset in Preset::ALL {
        let spec = preset.spec();
        let wholesale = estimator.wholesale(&preset.inputs(), QuoteMode::Both);
        let _ = writeln!(
            out,
            "{:<8} {} days, {} Staff & VIP, {} guests, pre-plan {:<3}  cost {}",
            preset.as_str(),
            spec.days,
            spec.staff_vip,
            spec.guests,
            if spec.pre_plan { "yes" } else { "no" },
            format_currency(wholesale.cost)
        );
    }

    out
}

#[derive(Debug, Serialize)]
struct BatchRow<'a> {
    label: &'a str,
    #[serde(flatten)]
    quote: &'a QuoteEstimate,
}

pub fn run_batch(
    config: &AppConfig,
    file: &Path,
    json: bool,
) -> Result<String> {
    // Blank cells take the same sponsorship values a fresh session starts with
    let defaults = QuoteSession::new(&config.sponsorship).assumptions();
    let scenarios = ScenarioLoader::new(defaults)
        .load_from_file(file)
        .with_context(|| format!("Failed to load scenarios: {}", file.display()))?;
    let estimator = Estimator::new(&config.pricing, &config.discount_tiers);

    let quotes: Vec<QuoteEstimate> = scenarios
        .iter()
        .map(|s| estimator.estimate(&s.inputs, &s.assumptions, s.mode))
        .collect();
    info!(count = quotes.len(), "estimated scenarios");

    if json {
        let rows: Vec<BatchRow<'_>> = scenarios
            .iter()
            .zip(&quotes)
            .map(|(s, quote)| BatchRow {
                label: &s.label,
                quote,
            })
            .collect();
        return serde_json::to_string_pretty(&rows).context("Failed to encode estimates");
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:<9} {:>14} {:>14} {:>14} {:>8}",
        "Scenario", "Mode", "Cost", "Payout", "Net", "ROI"
    );
    for (scenario, quote) in scenarios.iter().zip(&quotes) {
        let _ = writeln!(
            out,
            "{:<24} {:<9} {:>14} {:>14} {:>14} {:>8}",
            scenario.label,
            quote.mode.as_str(),
            format_currency(quote.wholesale.cost),
            format_currency(quote.sponsored.payout),
            format_currency(quote.combined.net),
            format_percent(quote.combined.roi, 1)
        );
    }
    Ok(out)
}

const MAX_DRAFT_SUFFIX: u32 = 1000;

/// How a quote request ended up being delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    /// Submission failed; the payload was written to this file instead.
    Drafted(PathBuf),
}

/// Writes `payload` as pretty JSON into `dir` and returns the file path.
///
/// Existing drafts are never overwritten; a numeric suffix is added when the
/// timestamped name is taken.
pub fn write_draft(
    payload: &LeadPayload,
    dir: &Path,
) -> Result<PathBuf> {
    let stem = format!(
        "quote-request-{}",
        payload.created_at.format("%Y%m%dT%H%M%SZ")
    );
    let text = serde_json::to_string_pretty(payload).context("Failed to encode lead")?;

    for attempt in 1..=MAX_DRAFT_SUFFIX {
        let name = match attempt {
            1 => format!("{stem}.json"),
            n => format!("{stem}-{n}.json"),
        };
        let path = dir.join(name);
        let mut file = match File::options().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to write draft: {}", path.display()));
            }
        };
        file.write_all(text.as_bytes())
            .with_context(|| format!("Failed to write draft: {}", path.display()))?;
        return Ok(path);
    }

    anyhow::bail!("no free draft file name in {}", dir.display())
}

/// Submits the lead and falls back to a local draft when delivery fails.
pub async fn deliver_lead(
    submitter: &dyn LeadSubmitter,
    payload: &LeadPayload,
    draft_dir: &Path,
) -> Result<SubmitOutcome> {
    match submitter.submit_lead(payload).await {
        Ok(()) => Ok(SubmitOutcome::Sent),
        Err(error) => {
            warn!(%error, "lead submission failed, writing draft");
            let path = write_draft(payload, draft_dir)?;
            Ok(SubmitOutcome::Drafted(path))
        }
    }
}

pub async fn run_submit(
    config: &AppConfig,
    quote: &QuoteArgs,
    lead: &LeadArgs,
) -> Result<String> {
    let estimator = Estimator::new(&config.pricing, &config.discount_tiers);
    let store = ContactStore::new(&lead.contact_file);

    let mut session = build_session(config, quote);
    session.contact = store.load();
    lead.apply(&mut session)?;

    validate_lead(&session.contact, i64::from(session.inputs.days))?;
    if let Err(error) = store.save(&session.contact) {
        warn!(%error, "could not remember contact details");
    }

    let payload = session.lead_payload(&estimator, &config.lead.notify_email, Utc::now());
    let draft_dir = &config.lead.draft_dir;
    let outcome = match HttpLeadSubmitter::new(
        &config.lead.endpoint,
        Duration::from_secs(config.lead.timeout_secs),
    ) {
        Ok(submitter) => deliver_lead(&submitter, &payload, draft_dir).await?,
        Err(error) => {
            warn!(%error, "no HTTP client, writing draft");
            SubmitOutcome::Drafted(write_draft(&payload, draft_dir)?)
        }
    };
    let message = match outcome {
        SubmitOutcome::Sent => "Request sent! We'll reply shortly.".to_string(),
        SubmitOutcome::Drafted(path) => format!(
            "Could not reach the quote service. Your request was saved to {}; \
             please email it to {}.",
            path.display(),
            config.lead.notify_email
        ),
    };
    Ok(message)
}
