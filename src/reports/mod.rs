//! Reports module for Cashflow
//!
//! Derived figures computed from the transaction list: balances and survival
//! forecast, and the daily income/expense trend.

pub mod stats;
pub mod trend;

pub use stats::{compute_stats, FinancialStats};
pub use trend::{TrendPoint, TrendReport, DEFAULT_TREND_DAYS};
