//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod advisor;
pub mod export;
pub mod report;
pub mod settings;
pub mod transaction;

pub use advisor::{handle_advisor_command, AdvisorCommands};
pub use export::handle_export_command;
pub use report::{handle_log_command, handle_stats_command};
pub use settings::{handle_settings_command, SettingsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
