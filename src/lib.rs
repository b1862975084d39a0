//! Cashflow - personal cash-flow tracking from the terminal
//!
//! Records income and expense transactions paid from cash or a bank account,
//! derives current balances and a survival forecast, exports CSV statements,
//! and asks a generative advisor for financial advice as text or speech.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and application preferences
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, settings)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `reports`: Statistics and the daily trend
//! - `export`: CSV statement export
//! - `advisor`: Advice and speech through a generative provider
//! - `display`, `cli`: Terminal presentation
//!
//! # Example
//!
//! ```rust,ignore
//! use cashflow_cli::config::paths::CashflowPaths;
//! use cashflow_cli::reports::compute_stats;
//! use cashflow_cli::storage::Storage;
//!
//! let mut storage = Storage::new(CashflowPaths::new()?)?;
//! storage.load_all()?;
//! let stats = compute_stats(&storage.transactions.get_all()?, &storage.settings.get()?);
//! ```

pub mod advisor;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::CashflowError;
