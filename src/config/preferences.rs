//! Application preferences for Cashflow
//!
//! Manages the advisor models, voice, currency label and prompt context size.
//! The financial opening balances live in [`crate::models::Settings`]; this file
//! only carries how the application itself behaves.

use serde::{Deserialize, Serialize};

use super::paths::CashflowPaths;
use crate::error::CashflowError;

/// User preferences for Cashflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency label shown next to amounts
    #[serde(default = "default_currency_label")]
    pub currency_label: String,

    /// Model used for text advice
    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// Model used for speech synthesis
    #[serde(default = "default_speech_model")]
    pub speech_model: String,

    /// Prebuilt voice used for speech synthesis
    #[serde(default = "default_voice_name")]
    pub voice_name: String,

    /// Base URL of the generative API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Number of trailing transactions embedded in an advice prompt
    #[serde(default = "default_recent_context_size")]
    pub recent_context_size: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_label() -> String {
    "VND".to_string()
}

fn default_text_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_speech_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

fn default_voice_name() -> String {
    "Kore".to_string()
}

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_recent_context_size() -> usize {
    10
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_label: default_currency_label(),
            text_model: default_text_model(),
            speech_model: default_speech_model(),
            voice_name: default_voice_name(),
            api_base_url: default_api_base_url(),
            recent_context_size: default_recent_context_size(),
        }
    }
}

impl Preferences {
    /// Load preferences from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &CashflowPaths) -> Result<Self, CashflowError> {
        let path = paths.preferences_file();

        if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                CashflowError::Io(format!("Failed to read preferences file: {}", e))
            })?;

            let preferences: Preferences = serde_json::from_str(&contents).map_err(|e| {
                CashflowError::Config(format!("Failed to parse preferences file: {}", e))
            })?;

            Ok(preferences)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Preferences::default())
        }
    }

    /// Save preferences to disk
    pub fn save(&self, paths: &CashflowPaths) -> Result<(), CashflowError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CashflowError::Config(format!("Failed to serialize preferences: {}", e))
        })?;

        std::fs::write(paths.preferences_file(), contents).map_err(|e| {
            CashflowError::Io(format!("Failed to write preferences file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert_eq!(prefs.currency_label, "VND");
        assert_eq!(prefs.voice_name, "Kore");
        assert_eq!(prefs.recent_context_size, 10);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut prefs = Preferences::default();
        prefs.voice_name = "Puck".to_string();
        prefs.recent_context_size = 5;
        prefs.save(&paths).unwrap();

        let loaded = Preferences::load_or_create(&paths).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"voice_name": "Puck"}"#).unwrap();
        assert_eq!(prefs.voice_name, "Puck");
        assert_eq!(prefs.text_model, "gemini-3-pro-preview");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.preferences_file(), "{not json").unwrap();

        let err = Preferences::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, CashflowError::Config(_)));
    }
}
