//! End-to-end tests of the command layer: argument parsing, configuration
//! and the estimate, batch and submit flows.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use clap::Parser;
use pretty_assertions::assert_eq;
use quote_cli::app::{self, SubmitOutcome};
use quote_cli::cli::{Cli, Command, LeadArgs, QuoteArgs};
use quote_cli::config::AppConfig;
use quote_cli::contact_store::ContactStore;
use quote_cli::state::QuoteSession;
use quote_core::lead::{Contact, LeadPayload, LeadValidationError};
use quote_core::{Estimator, LeadSubmitter, Preset, QuoteMode, SubmissionError, SupportRole};
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rv-quote-cli-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn files_in(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    files.sort();
    files
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn estimate_args(cli: Cli) -> (QuoteArgs, bool) {
    match cli.command {
        Command::Estimate { quote, json } => (quote, json),
        other => panic!("expected estimate command, got {other:?}"),
    }
}

// --- Argument parsing ---

#[test]
fn parses_estimate_with_preset_and_overrides() {
    let cli = Cli::try_parse_from([
        "rv-quote",
        "estimate",
        "--preset",
        "pro",
        "--guests",
        "30",
        "--support",
        "tech,cleaning",
        "--sponsorship-pct",
        "15",
        "--json",
    ])
    .unwrap();
    let (args, json) = estimate_args(cli);

    assert!(json);
    assert_eq!(args.preset, Some(Preset::Pro));
    assert_eq!(args.guests, Some(30));
    assert_eq!(
        args.support,
        Some(vec![SupportRole::Technician, SupportRole::Cleaning])
    );
    assert_eq!(args.sponsorship_pct, Some(dec!(15)));
}

#[test]
fn accepts_negative_counts_for_clamping() {
    let cli = Cli::try_parse_from(["rv-quote", "estimate", "--staff-vip", "-4", "--days", "0"])
        .unwrap();
    let (args, _) = estimate_args(cli);

    let mut session = QuoteSession::new(&AppConfig::default().sponsorship);
    args.apply(&mut session);

    assert_eq!(session.inputs.units.staff_vip, 0);
    assert_eq!(session.inputs.days, 1);
}

#[test]
fn rejects_unknown_mode() {
    let result = Cli::try_parse_from(["rv-quote", "estimate", "--mode", "lease"]);

    assert!(result.is_err());
}

#[test]
fn mode_accepts_sponsored_alias() {
    let cli = Cli::try_parse_from(["rv-quote", "estimate", "--mode", "sponsored"]).unwrap();
    let (args, _) = estimate_args(cli);

    assert_eq!(args.mode, Some(QuoteMode::Sponsored));
}

#[test]
fn explicit_values_win_over_preset() {
    let cli = Cli::try_parse_from([
        "rv-quote", "estimate", "--preset", "mega", "--days", "2", "--pre-plan", "false",
    ])
    .unwrap();
    let (args, _) = estimate_args(cli);

    let mut session = QuoteSession::new(&AppConfig::default().sponsorship);
    args.apply(&mut session);

    assert_eq!(session.preset, Some(Preset::Mega));
    assert_eq!(session.inputs.days, 2);
    assert!(!session.inputs.add_ons.pre_plan);
    assert_eq!(session.inputs.units.guests, 20);
}

// --- Configuration ---

#[test]
fn config_file_overrides_pricing_and_tiers() {
    let config = app::load_config(Some(&fixture("config.toml")), None).unwrap();

    assert_eq!(config.pricing.staff_vip, dec!(200));
    assert_eq!(config.discount_tiers.len(), 1);
    assert_eq!(config.lead.notify_email, "events@example.com");
    // Unset lead fields keep their defaults
    assert_eq!(config.lead.timeout_secs, 10);

    // 1 × 4 × 200 + 6 × 4 × 150 = 4400, half off
    let text = app::run_estimate(&config, &QuoteArgs::default(), false).unwrap();
    assert!(text.contains("$2,200.00"), "{text}");
}

#[test]
fn tier_csv_replaces_configured_tiers() {
    let tiers = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../quote-data/tests/fixtures/tiers.csv");
    let config = app::load_config(None, Some(&tiers)).unwrap();

    assert_eq!(config.discount_tiers.len(), 4);
}

#[test]
fn missing_config_file_is_an_error() {
    let result = app::load_config(Some(&fixture("nope.toml")), None);

    assert!(result.is_err());
}

// --- Estimate ---

#[test]
fn default_estimate_report_shows_both_programs() {
    let config = AppConfig::default();
    let text = app::run_estimate(&config, &QuoteArgs::default(), false).unwrap();

    assert!(text.contains("Event-Hosted"), "{text}");
    assert!(text.contains("RVEEDOM-Sponsored"), "{text}");
    assert!(text.contains("$4,601.80"), "{text}");
}

#[test]
fn json_estimate_carries_every_section() {
    let config = AppConfig::default();
    let args = QuoteArgs {
        mode: Some(QuoteMode::Wholesale),
        ..QuoteArgs::default()
    };
    let text = app::run_estimate(&config, &args, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["mode"], "wholesale");
    assert!(value["wholesale"]["cost"].is_string());
    assert!(value["sponsored"].is_object());
    assert!(value["combined"]["roi"].is_string());
}

#[test]
fn extreme_bookings_and_days_do_not_panic() {
    let args = QuoteArgs {
        bookings: Some(9_000_000_000_000_000_000),
        days: Some(4_000_000_000),
        avg_rate: Some(dec!(79228162514264337593543950335)),
        ..QuoteArgs::default()
    };

    let text = app::run_estimate(&AppConfig::default(), &args, false).unwrap();
    let json = app::run_estimate(&AppConfig::default(), &args, true).unwrap();

    assert!(text.contains("RVEEDOM-Sponsored"), "{text}");
    assert!(json.contains("\"gross\""), "{json}");
}

#[test]
fn preset_listing_has_one_line_per_preset() {
    let text = app::list_presets(&AppConfig::default());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("starter"));
    // 14 units × 6 days × 173 + 2500, less 10%
    assert!(lines[1].contains("$15,328.80"), "{}", lines[1]);
}

// --- Batch ---

#[test]
fn batch_table_lists_each_scenario() {
    let text = app::run_batch(&AppConfig::default(), &fixture("scenarios.csv"), false).unwrap();

    assert!(text.contains("Small meetup"));
    assert!(text.contains("$346.00"));
    assert!(text.contains("Regional festival"));
    assert!(text.contains("$1,557.00"));
}

#[test]
fn batch_json_keeps_labels() {
    let text = app::run_batch(&AppConfig::default(), &fixture("scenarios.csv"), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[1]["label"], "Regional festival");
    assert_eq!(value[1]["mode"], "both");
}

#[test]
fn batch_blank_cells_follow_configured_sponsorship() {
    let config = app::load_config(Some(&fixture("config.toml")), None).unwrap();
    let args = QuoteArgs {
        mode: Some(QuoteMode::Both),
        staff_vip: Some(1),
        guests: Some(0),
        days: Some(1),
        pre_plan: Some(false),
        ..QuoteArgs::default()
    };

    let batch: serde_json::Value =
        serde_json::from_str(&app::run_batch(&config, &fixture("single_row.csv"), true).unwrap())
            .unwrap();
    let single: serde_json::Value =
        serde_json::from_str(&app::run_estimate(&config, &args, true).unwrap()).unwrap();

    // 10 bookings × 1 day × 150
    assert_eq!(single["sponsored"]["gross"], "1500");
    assert_eq!(batch[0]["sponsored"], single["sponsored"]);
    assert_eq!(batch[0]["wholesale"], single["wholesale"]);
    assert_eq!(batch[0]["combined"], single["combined"]);
}

#[test]
fn batch_rejects_unknown_mode() {
    let result = app::run_batch(&AppConfig::default(), &fixture("bad_mode.csv"), false);

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("wholsale"), "{message}");
}

// --- Submission ---

/// Records each submission and answers with a fixed HTTP status.
struct FixedSubmitter {
    status: u16,
    seen: Mutex<Vec<String>>,
}

impl FixedSubmitter {
    fn new(status: u16) -> Self {
        Self {
            status,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LeadSubmitter for FixedSubmitter {
    async fn submit_lead(
        &self,
        payload: &LeadPayload,
    ) -> Result<(), SubmissionError> {
        self.seen.lock().unwrap().push(payload.contact.email.clone());
        match self.status {
            200..=299 => Ok(()),
            status => Err(SubmissionError::Rejected(status)),
        }
    }
}

fn sample_payload() -> LeadPayload {
    let config = AppConfig::default();
    let estimator = Estimator::new(&config.pricing, &config.discount_tiers);
    let mut session = QuoteSession::new(&config.sponsorship);
    session.contact = Contact {
        name: "Dana Ortiz".to_string(),
        email: "dana@example.com".to_string(),
        phone: String::new(),
    };
    let created_at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
    session.lead_payload(&estimator, &config.lead.notify_email, created_at)
}

#[tokio::test]
async fn accepted_lead_writes_no_draft() {
    let dir = scratch_dir("sent");
    let submitter = FixedSubmitter::new(200);

    let outcome = app::deliver_lead(&submitter, &sample_payload(), &dir)
        .await
        .unwrap();

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(*submitter.seen.lock().unwrap(), vec!["dana@example.com"]);
    assert!(!dir.join("quote-request-20260314T093000Z.json").exists());
}

#[tokio::test]
async fn rejected_lead_falls_back_to_draft() {
    let dir = scratch_dir("drafted");
    let submitter = FixedSubmitter::new(503);

    let outcome = app::deliver_lead(&submitter, &sample_payload(), &dir)
        .await
        .unwrap();

    let expected = dir.join("quote-request-20260314T093000Z.json");
    assert_eq!(outcome, SubmitOutcome::Drafted(expected.clone()));

    let text = std::fs::read_to_string(&expected).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["contact"]["email"], "dana@example.com");
    assert!(value["selectionsV2"].is_object());

    std::fs::remove_file(expected).unwrap();
}

#[test]
fn drafts_in_the_same_second_do_not_overwrite() {
    let dir = scratch_dir("same-second");
    let payload = sample_payload();

    let first = app::write_draft(&payload, &dir).unwrap();
    let second = app::write_draft(&payload, &dir).unwrap();

    assert_eq!(first, dir.join("quote-request-20260314T093000Z.json"));
    assert_eq!(second, dir.join("quote-request-20260314T093000Z-2.json"));
    assert_eq!(files_in(&dir).len(), 2);
}

// --- The submit command ---

/// Nothing listens on port 1, so every request is refused.
const UNREACHABLE: &str = "http://127.0.0.1:1/api/rveedom/events-lead";

fn submit_args(extra: &[&str]) -> (QuoteArgs, LeadArgs) {
    let argv = ["rv-quote", "submit"].iter().chain(extra).copied();
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Submit { quote, lead } => (quote, lead),
        other => panic!("expected submit command, got {other:?}"),
    }
}

fn submit_config(
    endpoint: &str,
    draft_dir: &Path,
) -> AppConfig {
    let mut config = AppConfig::default();
    config.lead.endpoint = endpoint.to_string();
    config.lead.timeout_secs = 2;
    config.lead.draft_dir = draft_dir.to_path_buf();
    config
}

#[tokio::test]
async fn invalid_email_stops_before_saving_or_sending() {
    let dir = scratch_dir("invalid-email");
    let drafts = dir.join("drafts");
    std::fs::create_dir_all(&drafts).unwrap();
    let contact_file = dir.join("contact.toml");
    let (quote, lead) = submit_args(&[
        "--name",
        "Dana Ortiz",
        "--email",
        "dana-at-example",
        "--contact-file",
        contact_file.to_str().unwrap(),
    ]);

    let error = app::run_submit(&submit_config(UNREACHABLE, &drafts), &quote, &lead)
        .await
        .unwrap_err();

    assert_eq!(
        error.downcast_ref::<LeadValidationError>(),
        Some(&LeadValidationError::InvalidEmail)
    );
    assert!(!contact_file.exists());
    assert!(files_in(&drafts).is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_drafts_and_remembers_contact() {
    let dir = scratch_dir("unreachable");
    let drafts = dir.join("drafts");
    std::fs::create_dir_all(&drafts).unwrap();
    let contact_file = dir.join("contact.toml");
    let (quote, lead) = submit_args(&[
        "--preset",
        "pro",
        "--name",
        "Dana Ortiz",
        "--email",
        "dana@example.com",
        "--event-name",
        "Desert Beats",
        "--contact-file",
        contact_file.to_str().unwrap(),
    ]);

    let message = app::run_submit(&submit_config(UNREACHABLE, &drafts), &quote, &lead)
        .await
        .unwrap();

    let written = files_in(&drafts);
    assert_eq!(written.len(), 1);
    assert!(message.contains(&written[0].display().to_string()), "{message}");

    let draft = read_json(&written[0]);
    assert_eq!(draft["contact"]["email"], "dana@example.com");
    assert_eq!(draft["eventDetails"]["eventName"], "Desert Beats");
    assert_eq!(draft["selectionsV2"]["guests"], 12);
    assert_eq!(draft["wholesale"]["cost"], 15328.8);

    let saved = ContactStore::new(&contact_file).load();
    assert_eq!(saved.name, "Dana Ortiz");
}

#[tokio::test]
async fn saved_contact_prefills_and_flags_override() {
    let dir = scratch_dir("prefill");
    let drafts = dir.join("drafts");
    std::fs::create_dir_all(&drafts).unwrap();
    let contact_file = dir.join("contact.toml");
    let store = ContactStore::new(&contact_file);
    store
        .save(&Contact {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            phone: "555-0100".to_string(),
        })
        .unwrap();
    let (quote, lead) = submit_args(&[
        "--name",
        "Dana Ortiz",
        "--contact-file",
        contact_file.to_str().unwrap(),
    ]);

    app::run_submit(&submit_config(UNREACHABLE, &drafts), &quote, &lead)
        .await
        .unwrap();

    let draft = read_json(&files_in(&drafts)[0]);
    assert_eq!(draft["contact"]["name"], "Dana Ortiz");
    assert_eq!(draft["contact"]["email"], "dana@example.com");
    assert_eq!(draft["contact"]["phone"], "555-0100");
    assert_eq!(store.load().name, "Dana Ortiz");
}

#[tokio::test]
async fn malformed_endpoint_still_drafts() {
    let dir = scratch_dir("bad-endpoint");
    let contact_file = dir.join("contact.toml");
    let (quote, lead) = submit_args(&[
        "--name",
        "Dana Ortiz",
        "--email",
        "dana@example.com",
        "--contact-file",
        contact_file.to_str().unwrap(),
    ]);

    let message = app::run_submit(&submit_config("not a url", &dir), &quote, &lead)
        .await
        .unwrap();

    assert!(message.contains("saved to"), "{message}");
    let drafts: Vec<PathBuf> = files_in(&dir)
        .into_iter()
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    assert_eq!(drafts.len(), 1);
}
