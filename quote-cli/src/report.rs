//! Plain-text rendering of a quote.

use std::fmt;

use quote_core::{QuoteEstimate, QuoteMode};
use rust_decimal::Decimal;

use crate::state::QuoteSession;
use crate::utils::{format_currency, format_percent};

/// A session and its estimate, rendered for the terminal.
pub struct QuoteReport<'a> {
    pub session: &'a QuoteSession,
    pub quote: &'a QuoteEstimate,
}

impl<'a> QuoteReport<'a> {
    pub fn new(
        session: &'a QuoteSession,
        quote: &'a QuoteEstimate,
    ) -> Self {
        Self { session, quote }
    }

    fn write_wholesale(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let w = &self.quote.wholesale;
        writeln!(f, "Event-Hosted")?;
        writeln!(f, "  Subtotal:            {:>14}", format_currency(w.subtotal))?;
        if w.discount_fraction > Decimal::ZERO {
            writeln!(
                f,
                "  Volume discount {:>4}: {:>13}",
                format_percent(w.discount_fraction, 0),
                format!("-{}", format_currency(w.discount_amount))
            )?;
        }
        writeln!(f, "  Cost after discount: {:>14}", format_currency(w.cost))
    }

    fn write_sponsored(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let s = &self.quote.sponsored;
        let session = self.session;
        writeln!(f, "RVEEDOM-Sponsored")?;
        writeln!(
            f,
            "  Based on {} bookings × {} days × {} @ {} sponsorship",
            session.expected_bookings,
            session.inputs.days,
            format_currency(session.avg_rate),
            format_percent(session.sponsorship_fraction, 0)
        )?;
        writeln!(f, "  Gross:               {:>14}", format_currency(s.gross))?;
        writeln!(f, "  Payout (to you):     {:>14}", format_currency(s.payout))?;
        writeln!(
            f,
            "  Ops cost @ {}/RV/day: {:>9}",
            format_currency(session.ops_cost),
            format_currency(s.ops_cost)
        )?;
        writeln!(f, "  Net after ops:       {:>14}", format_currency(s.net))
    }
}

impl fmt::Display for QuoteReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let inputs = &self.session.inputs;
        let support: Vec<&str> = inputs.add_ons.support.iter().map(|r| r.label()).collect();

        writeln!(f, "Quick Quote ({})", self.quote.mode.label())?;
        if let Some(preset) = self.session.preset {
            writeln!(f, "  Preset:        {}", preset.label())?;
        }
        writeln!(f, "  Staff & VIPs:  {}", inputs.units.staff_vip)?;
        writeln!(f, "  Guests:        {}", inputs.units.guests)?;
        writeln!(f, "  Days on site:  {}", inputs.days)?;
        writeln!(
            f,
            "  Pre-Plan:      {}",
            if inputs.add_ons.pre_plan { "Yes" } else { "No" }
        )?;
        writeln!(
            f,
            "  Support roles: {}",
            if support.is_empty() {
                "None".to_string()
            } else {
                support.join(", ")
            }
        )?;
        writeln!(f)?;

        match self.quote.mode {
            QuoteMode::Wholesale => self.write_wholesale(f)?,
            QuoteMode::Sponsored => self.write_sponsored(f)?,
            QuoteMode::Both => {
                self.write_wholesale(f)?;
                writeln!(f)?;
                self.write_sponsored(f)?;
                writeln!(f)?;
                let combined = &self.quote.combined;
                writeln!(f, "Payout vs. cost")?;
                writeln!(f, "  Net:                 {:>14}", format_currency(combined.net))?;
                writeln!(f, "  ROI:                 {:>14}", format_percent(combined.roi, 1))?;
            }
        }

        write!(f, "\nSupport roles are quoted separately. Estimates are non-binding.")
    }
}
