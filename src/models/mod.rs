//! Core data models for Cashflow
//!
//! This module contains the data structures shared by the store, the
//! statistics engine, the CSV exporter and the advisor.

pub mod ids;
pub mod money;
pub mod settings;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use settings::Settings;
pub use transaction::{NewTransaction, PaymentSource, Transaction, TransactionType};
