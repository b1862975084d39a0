//! Service layer for Cashflow
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and the save-after-mutate discipline.

pub mod settings;
pub mod transaction;

pub use settings::{SettingsService, SettingsUpdate};
pub use transaction::TransactionService;
