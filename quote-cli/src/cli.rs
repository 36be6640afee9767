//! Command-line definition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use quote_core::lead::EventDetails;
use quote_core::{Preset, QuoteMode, SupportRole};
use rust_decimal::Decimal;

use crate::state::QuoteSession;
use crate::utils::parse_decimal;

/// Event RV quote estimator.
///
/// Compares the cost of pre-purchasing RV units for an event with the payout
/// of operator-sponsored attendee bookings. Figures are non-binding.
#[derive(Debug, Parser)]
#[command(name = "rv-quote", version, about)]
pub struct Cli {
    /// TOML configuration file (pricing, tiers, sponsorship defaults, lead endpoint).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// CSV discount tier table; replaces the configured tiers.
    #[arg(long, global = true)]
    pub tiers: Option<PathBuf>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log calculation details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate event-hosted cost and sponsored payout.
    Estimate {
        #[command(flatten)]
        quote: QuoteArgs,

        /// Print the estimate as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the quote presets.
    Presets,

    /// Estimate every scenario in a CSV file.
    Batch {
        /// Scenario CSV file.
        #[arg(short, long)]
        file: PathBuf,

        /// Print the estimates as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Request a formal quote for the current inputs.
    Submit {
        #[command(flatten)]
        quote: QuoteArgs,

        #[command(flatten)]
        lead: LeadArgs,
    },
}

fn parse_preset(s: &str) -> Result<Preset, String> {
    Preset::parse(s).ok_or_else(|| format!("unknown preset '{s}' (expected starter, pro or mega)"))
}

fn parse_mode(s: &str) -> Result<QuoteMode, String> {
    QuoteMode::parse(s)
        .ok_or_else(|| format!("unknown mode '{s}' (expected wholesale, revshare or both)"))
}

fn parse_support_role(s: &str) -> Result<SupportRole, String> {
    SupportRole::parse(s)
        .ok_or_else(|| format!("unknown support role '{s}' (expected tech, concierge or cleaning)"))
}

fn parse_amount(s: &str) -> Result<Decimal, String> {
    parse_decimal(s).map_err(|e| e.to_string())
}

/// Quote builder inputs. Anything omitted keeps the preset or configured value.
#[derive(Debug, Clone, Default, Args)]
pub struct QuoteArgs {
    /// Start from a preset: starter, pro or mega.
    #[arg(long, value_parser = parse_preset)]
    pub preset: Option<Preset>,

    /// wholesale, revshare (sponsored) or both.
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<QuoteMode>,

    /// Staff & VIP units (clamped to 0..=999).
    #[arg(long, allow_negative_numbers = true)]
    pub staff_vip: Option<i64>,

    /// Guest units (clamped to 0..=999).
    #[arg(long, allow_negative_numbers = true)]
    pub guests: Option<i64>,

    /// Event days on site (at least 1).
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Include the pre-plan package.
    #[arg(long)]
    pub pre_plan: Option<bool>,

    /// Support roles to request (comma separated): tech, concierge, cleaning.
    #[arg(long, value_delimiter = ',', value_parser = parse_support_role)]
    pub support: Option<Vec<SupportRole>>,

    /// Expected sponsored bookings.
    #[arg(long, allow_negative_numbers = true)]
    pub bookings: Option<i64>,

    /// Average rate per RV per day.
    #[arg(long, value_parser = parse_amount)]
    pub avg_rate: Option<Decimal>,

    /// Sponsorship share as a whole percent, e.g. 12.
    #[arg(long, value_parser = parse_amount)]
    pub sponsorship_pct: Option<Decimal>,

    /// Operating cost per RV per day.
    #[arg(long, value_parser = parse_amount)]
    pub ops_cost: Option<Decimal>,
}

impl QuoteArgs {
    /// Applies the arguments in builder order: preset first, then individual
    /// fields, so an explicit value always wins over the preset.
    pub fn apply(
        &self,
        session: &mut QuoteSession,
    ) {
        if let Some(preset) = self.preset {
            session.apply_preset(preset);
        }
        if let Some(mode) = self.mode {
            session.mode = mode;
        }
        if let Some(staff_vip) = self.staff_vip {
            session.set_staff_vip(staff_vip);
        }
        if let Some(guests) = self.guests {
            session.set_guests(guests);
        }
        if let Some(days) = self.days {
            session.set_days(days);
        }
        if let Some(pre_plan) = self.pre_plan {
            session.set_pre_plan(pre_plan);
        }
        if let Some(support) = &self.support {
            session.set_support_roles(support.iter().copied());
        }
        if let Some(bookings) = self.bookings {
            session.set_expected_bookings(bookings);
        }
        if let Some(rate) = self.avg_rate {
            session.set_avg_rate(rate);
        }
        if let Some(pct) = self.sponsorship_pct {
            session.set_sponsorship_percent(pct);
        }
        if let Some(cost) = self.ops_cost {
            session.set_ops_cost(cost);
        }
    }
}

/// Contact and questionnaire answers for a quote request.
#[derive(Debug, Clone, Args)]
pub struct LeadArgs {
    /// Contact name (defaults to the saved contact).
    #[arg(long)]
    pub name: Option<String>,

    /// Contact email (defaults to the saved contact).
    #[arg(long)]
    pub email: Option<String>,

    /// Contact phone (defaults to the saved contact).
    #[arg(long)]
    pub phone: Option<String>,

    /// Free-form notes for the quote team.
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Read notes from a file instead.
    #[arg(long, conflicts_with = "notes")]
    pub notes_file: Option<PathBuf>,

    #[arg(long)]
    pub event_name: Option<String>,

    #[arg(long)]
    pub dates: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub attendance: Option<String>,

    #[arg(long)]
    pub load_in: Option<String>,

    #[arg(long)]
    pub load_out: Option<String>,

    /// Power and water constraints.
    #[arg(long)]
    pub power_water: Option<String>,

    /// Where the contact details are remembered between runs.
    #[arg(long, default_value = ".rv-quote-contact.toml")]
    pub contact_file: PathBuf,
}

impl LeadArgs {
    /// Fills contact, notes and event details on the session. Contact fields
    /// given on the command line replace the saved ones.
    pub fn apply(
        &self,
        session: &mut QuoteSession,
    ) -> Result<()> {
        if let Some(name) = &self.name {
            session.contact.name = name.trim().to_string();
        }
        if let Some(email) = &self.email {
            session.contact.email = email.trim().to_string();
        }
        if let Some(phone) = &self.phone {
            session.contact.phone = phone.trim().to_string();
        }

        session.notes = match &self.notes_file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read notes: {}", path.display()))?,
            None => self.notes.clone(),
        };

        session.event_details = EventDetails {
            event_name: self.event_name.clone(),
            dates: self.dates.clone(),
            location: self.location.clone(),
            expected_attendance: self.attendance.clone(),
            load_in: self.load_in.clone(),
            load_out: self.load_out.clone(),
            power_water: self.power_water.clone(),
        };

        Ok(())
    }
}
