use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unit prices used by the wholesale estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTable {
    /// Price per Staff & VIP unit per day.
    pub staff_vip: Decimal,
    /// Price per Guest unit per day.
    pub guests: Decimal,
    /// Flat price of the pre-plan add-on.
    pub pre_plan: Decimal,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            staff_vip: Decimal::from(173),
            guests: Decimal::from(173),
            pre_plan: Decimal::from(2500),
        }
    }
}
