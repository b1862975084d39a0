//! Change history of the ledger
//!
//! Each recorded or deleted transaction and each settings change is appended
//! to `audit.log` with snapshots of the record, and `cashflow log` prints the
//! tail of that history.
//!
//! - `AuditEntry`: one change, with the amount/source summary shown by `log`
//! - `AuditLogger`: JSONL append and read-back
//! - `generate_diff`: `key: before -> after` for settings updates
//!
//! # Example
//!
//! ```rust,ignore
//! use cashflow_cli::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(
//!     EntityType::Transaction,
//!     txn.id.to_string(),
//!     Some(txn.content.clone()),
//!     &txn,
//! );
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
