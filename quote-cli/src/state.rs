//! Quote builder state.
//!
//! Holds everything the user has entered for one quote. Each setter clamps
//! its raw value, so the estimator always sees in-domain inputs. Estimates
//! are recomputed from this state on demand and never stored in it.

use chrono::{DateTime, Utc};
use quote_core::lead::{Contact, EventDetails, LeadPayload};
use quote_core::{
    Estimator, Preset, QuoteEstimate, QuoteInputs, QuoteMode, SponsorshipAssumptions,
    SupportRole, clamp_days, clamp_units,
};
use rust_decimal::Decimal;

use crate::config::SponsorshipDefaults;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSession {
    pub mode: QuoteMode,
    /// Last preset applied, if any.
    pub preset: Option<Preset>,
    pub inputs: QuoteInputs,

    // Sponsored assumptions; days are taken from `inputs`.
    pub expected_bookings: i64,
    pub avg_rate: Decimal,
    pub sponsorship_fraction: Decimal,
    pub ops_cost: Decimal,

    pub contact: Contact,
    pub notes: String,
    pub event_details: EventDetails,
}

impl QuoteSession {
    /// Starts from the Starter preset with the configured sponsorship values.
    pub fn new(defaults: &SponsorshipDefaults) -> Self {
        Self {
            mode: QuoteMode::default(),
            preset: Some(Preset::Starter),
            inputs: Preset::Starter.inputs(),
            expected_bookings: defaults.expected_bookings.max(0),
            avg_rate: defaults.avg_rate.max(Decimal::ZERO),
            sponsorship_fraction: defaults.sponsorship_pct.clamp(Decimal::ZERO, Decimal::ONE),
            ops_cost: defaults.ops_cost.max(Decimal::ZERO),
            contact: Contact::default(),
            notes: String::new(),
            event_details: EventDetails::default(),
        }
    }

    pub fn apply_preset(
        &mut self,
        preset: Preset,
    ) {
        self.preset = Some(preset);
        self.inputs = preset.inputs();
        self.expected_bookings = preset.expected_bookings(self.expected_bookings);
    }

    pub fn set_staff_vip(
        &mut self,
        raw: i64,
    ) {
        self.inputs.units.staff_vip = clamp_units(raw);
    }

    /// Sets guest units; expected bookings are raised to at least the new
    /// guest count.
    pub fn set_guests(
        &mut self,
        raw: i64,
    ) {
        let guests = clamp_units(raw);
        self.inputs.units.guests = guests;
        self.expected_bookings = self.expected_bookings.max(i64::from(guests));
    }

    pub fn set_days(
        &mut self,
        raw: i64,
    ) {
        self.inputs.days = clamp_days(raw);
    }

    pub fn set_pre_plan(
        &mut self,
        enabled: bool,
    ) {
        self.inputs.add_ons.pre_plan = enabled;
    }

    pub fn set_support_roles(
        &mut self,
        roles: impl IntoIterator<Item = SupportRole>,
    ) {
        self.inputs.add_ons.support = roles.into_iter().collect();
    }

    pub fn set_expected_bookings(
        &mut self,
        raw: i64,
    ) {
        self.expected_bookings = raw.max(0);
    }

    pub fn set_avg_rate(
        &mut self,
        rate: Decimal,
    ) {
        self.avg_rate = rate.max(Decimal::ZERO);
    }

    pub fn set_ops_cost(
        &mut self,
        cost: Decimal,
    ) {
        self.ops_cost = cost.max(Decimal::ZERO);
    }

    /// Sets the sponsorship share from a whole percentage (`12` → 12%).
    pub fn set_sponsorship_percent(
        &mut self,
        percent: Decimal,
    ) {
        self.sponsorship_fraction =
            (percent / Decimal::ONE_HUNDRED).clamp(Decimal::ZERO, Decimal::ONE);
    }

    pub fn assumptions(&self) -> SponsorshipAssumptions {
        SponsorshipAssumptions {
            expected_bookings: self.expected_bookings,
            days: i64::from(self.inputs.days),
            avg_rate: self.avg_rate,
            sponsorship_fraction: self.sponsorship_fraction,
            ops_cost_per_unit_per_day: self.ops_cost,
        }
    }

    pub fn estimate(
        &self,
        estimator: &Estimator<'_>,
    ) -> QuoteEstimate {
        estimator.estimate(&self.inputs, &self.assumptions(), self.mode)
    }

    /// Snapshots the session into a lead payload.
    pub fn lead_payload(
        &self,
        estimator: &Estimator<'_>,
        notify: &str,
        created_at: DateTime<Utc>,
    ) -> LeadPayload {
        let quote = self.estimate(estimator);
        LeadPayload::from_quote(
            self.contact.clone(),
            &self.inputs,
            &quote,
            self.notes.clone(),
            self.event_details.clone(),
            notify,
            created_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quote_core::{PriceTable, UnitCounts, default_discount_tiers};
    use rust_decimal_macros::dec;

    use super::*;

    fn session() -> QuoteSession {
        QuoteSession::new(&SponsorshipDefaults::default())
    }

    #[test]
    fn new_session_uses_starter_defaults() {
        let s = session();

        assert_eq!(s.mode, QuoteMode::Both);
        assert_eq!(s.inputs.units, UnitCounts::new(1, 6));
        assert_eq!(s.inputs.days, 4);
        assert_eq!(s.expected_bookings, 24);
        assert_eq!(s.sponsorship_fraction, dec!(0.12));
    }

    #[test]
    fn raising_guests_raises_bookings() {
        let mut s = session();

        s.set_guests(30);

        assert_eq!(s.inputs.units.guests, 30);
        assert_eq!(s.expected_bookings, 30);
    }

    #[test]
    fn lowering_guests_keeps_bookings() {
        let mut s = session();

        s.set_guests(2);

        assert_eq!(s.expected_bookings, 24);
    }

    #[test]
    fn unit_setters_clamp() {
        let mut s = session();

        s.set_staff_vip(-3);
        s.set_guests(1500);
        s.set_days(0);

        assert_eq!(s.inputs.units, UnitCounts::new(0, 999));
        assert_eq!(s.inputs.days, 1);
    }

    #[test]
    fn sponsorship_percent_clamps() {
        let mut s = session();

        s.set_sponsorship_percent(dec!(150));
        assert_eq!(s.sponsorship_fraction, Decimal::ONE);

        s.set_sponsorship_percent(dec!(-5));
        assert_eq!(s.sponsorship_fraction, Decimal::ZERO);

        s.set_sponsorship_percent(dec!(15));
        assert_eq!(s.sponsorship_fraction, dec!(0.15));
    }

    #[test]
    fn mega_preset_sets_inputs_and_bookings() {
        let mut s = session();

        s.apply_preset(Preset::Mega);

        assert_eq!(s.preset, Some(Preset::Mega));
        assert_eq!(s.inputs.units, UnitCounts::new(4, 20));
        assert_eq!(s.inputs.days, 8);
        assert!(s.inputs.add_ons.pre_plan);
        assert_eq!(s.expected_bookings, 40);
    }

    #[test]
    fn assumptions_share_event_days() {
        let mut s = session();
        s.set_days(9);

        assert_eq!(s.assumptions().days, 9);
    }

    #[test]
    fn estimate_reflects_current_inputs() {
        let prices = PriceTable::default();
        let tiers = default_discount_tiers();
        let estimator = Estimator::new(&prices, &tiers);
        let mut s = session();
        s.set_staff_vip(5);
        s.set_guests(5);
        s.set_days(1);

        let quote = s.estimate(&estimator);

        assert_eq!(quote.wholesale.cost, dec!(1557));
    }
}
