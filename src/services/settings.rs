//! Settings service
//!
//! Direct edits to the opening balances and daily cost, persisted after
//! every change.

use crate::audit::EntityType;
use crate::error::CashflowResult;
use crate::models::{Money, Settings};
use crate::storage::Storage;

const SETTINGS_ENTITY_ID: &str = "settings";

/// Partial edit of the settings; `None` fields keep their value
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsUpdate {
    pub initial_cash: Option<Money>,
    pub initial_bank: Option<Money>,
    pub daily_cost: Option<Money>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.initial_cash.is_none() && self.initial_bank.is_none() && self.daily_cost.is_none()
    }

    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(cash) = self.initial_cash {
            settings.initial_cash = cash;
        }
        if let Some(bank) = self.initial_bank {
            settings.initial_bank = bank;
        }
        if let Some(daily) = self.daily_cost {
            settings.daily_cost = daily;
        }
        settings
    }
}

/// Service for settings management
pub struct SettingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SettingsService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> CashflowResult<Settings> {
        self.storage.settings.get()
    }

    /// Apply an edit and persist the result
    pub fn update(&self, update: SettingsUpdate) -> CashflowResult<Settings> {
        let before = self.storage.settings.get()?;
        let after = update.apply(before);
        self.replace(before, after)?;
        Ok(after)
    }

    /// Reset to `{0, 0, 0}` and persist
    pub fn reset(&self) -> CashflowResult<Settings> {
        let before = self.storage.settings.get()?;
        let after = Settings::default();
        self.replace(before, after)?;
        Ok(after)
    }

    fn replace(&self, before: Settings, after: Settings) -> CashflowResult<()> {
        self.storage.settings.set(after)?;
        self.storage.settings.save()?;

        if before != after {
            self.storage.log_update(
                EntityType::Settings,
                SETTINGS_ENTITY_ID,
                None,
                &before,
                &after,
            )?;
        }

        Ok(())
    }
}
