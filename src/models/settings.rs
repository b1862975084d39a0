//! Opening balances and daily cost
//!
//! Loaded once at startup, edited directly by the user, persisted after every
//! edit. Balances may be negative to represent debt.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Opening balances and the expected daily burn rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Cash on hand before any recorded transaction
    #[serde(default)]
    pub initial_cash: Money,

    /// Bank balance before any recorded transaction
    #[serde(default)]
    pub initial_bank: Money,

    /// Expected spending per day; zero disables the forecast
    #[serde(default)]
    pub daily_cost: Money,
}

impl Settings {
    pub fn new(initial_cash: Money, initial_bank: Money, daily_cost: Money) -> Self {
        Self {
            initial_cash,
            initial_bank,
            daily_cost,
        }
    }

    /// Sum of both opening balances
    pub fn initial_total(&self) -> Money {
        self.initial_cash + self.initial_bank
    }

    /// Whether a survival forecast can be computed
    pub fn has_forecast(&self) -> bool {
        self.daily_cost.is_positive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let settings = Settings::default();
        assert!(settings.initial_cash.is_zero());
        assert!(settings.initial_bank.is_zero());
        assert!(settings.daily_cost.is_zero());
        assert!(!settings.has_forecast());
    }

    #[test]
    fn test_camel_case_keys() {
        let settings = Settings::new(
            Money::from_units(100),
            Money::from_units(-50),
            Money::from_units(10),
        );
        let json = serde_json::to_value(settings).unwrap();
        assert_eq!(json["initialCash"], 100);
        assert_eq!(json["initialBank"], -50);
        assert_eq!(json["dailyCost"], 10);
    }

    #[test]
    fn test_missing_keys_default_to_zero() {
        let settings: Settings = serde_json::from_str(r#"{"initialCash": 500}"#).unwrap();
        assert_eq!(settings.initial_cash.units(), 500);
        assert!(settings.initial_bank.is_zero());
        assert!(settings.daily_cost.is_zero());
    }
}
