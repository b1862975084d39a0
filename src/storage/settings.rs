//! Settings repository for JSON storage
//!
//! Mirrors the opening balances to `cashflow_settings.json`.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CashflowError;
use crate::models::Settings;

use super::file_io::{read_json, write_json_atomic};

/// Repository for the single settings record
pub struct SettingsRepository {
    path: PathBuf,
    data: RwLock<Settings>,
}

impl SettingsRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Settings::default()),
        }
    }

    /// Load settings from disk; a missing file means `{0, 0, 0}`
    pub fn load(&self) -> Result<(), CashflowError> {
        let settings: Settings = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = settings;

        Ok(())
    }

    pub fn save(&self) -> Result<(), CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*data)
    }

    pub fn get(&self) -> Result<Settings, CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(*data)
    }

    /// Replace the settings, returning the previous value
    pub fn set(&self, settings: Settings) -> Result<Settings, CashflowError> {
        let mut data = self.data.write().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(std::mem::replace(&mut *data, settings))
    }
}
