//! Path management for Cashflow
//!
//! Provides platform-aware path resolution for configuration, data and the
//! audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `CASHFLOW_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `cashflow` (via `directories`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CashflowError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CASHFLOW_DATA_DIR";

/// Storage key for the opening balances and daily cost
pub const SETTINGS_KEY: &str = "cashflow_settings";

/// Storage key for the transaction list
pub const TRANSACTIONS_KEY: &str = "cashflow_transactions";

/// Manages all paths used by Cashflow
#[derive(Debug, Clone)]
pub struct CashflowPaths {
    /// Base directory for all Cashflow data
    base_dir: PathBuf,
}

impl CashflowPaths {
    /// Create a new CashflowPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, CashflowError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CashflowPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the preferences file
    pub fn preferences_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the persisted settings
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir().join(format!("{}.json", SETTINGS_KEY))
    }

    /// Get the path to the persisted transactions
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join(format!("{}.json", TRANSACTIONS_KEY))
    }

    /// Where synthesized speech is written when no speaker output is used
    pub fn speech_file(&self) -> PathBuf {
        self.base_dir.join("speech.wav")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), CashflowError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CashflowError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CashflowError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, CashflowError> {
    ProjectDirs::from("", "", "cashflow")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CashflowError::Config("Could not determine a config directory".into()))
}
