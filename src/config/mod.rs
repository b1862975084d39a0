//! Configuration module for Cashflow
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - Application preferences persistence

pub mod paths;
pub mod preferences;

pub use paths::CashflowPaths;
pub use preferences::Preferences;
