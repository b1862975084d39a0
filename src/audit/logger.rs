//! Append-only ledger change log
//!
//! Every mutation of the cash-flow store appends one JSON line to
//! `audit.log`. The file is never rewritten, so it also serves as the history
//! of deleted transactions.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{CashflowError, CashflowResult};

use super::entry::AuditEntry;

/// Writer and reader for the JSONL change log
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> CashflowError {
        CashflowError::Io(format!(
            "Failed to {} {}: {}",
            action,
            self.log_path.display(),
            e
        ))
    }

    /// Append one entry and flush it before returning
    pub fn log(&self, entry: &AuditEntry) -> CashflowResult<()> {
        let line = serde_json::to_string(entry)
            .map_err(|e| CashflowError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| self.io_error("open", e))?;

        writeln!(file, "{}", line).map_err(|e| self.io_error("append to", e))?;
        file.flush().map_err(|e| self.io_error("flush", e))
    }

    /// Every recorded change, oldest first; no log yet means no changes
    pub fn read_all(&self) -> CashflowResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error("open", e)),
        };

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_error("read", e))?;
            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str(&line).map_err(|e| {
                CashflowError::Json(format!(
                    "Unreadable change at {} line {}: {}",
                    self.log_path.display(),
                    index + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The last `count` changes, oldest first
    pub fn read_recent(&self, count: usize) -> CashflowResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use crate::models::{Money, PaymentSource, Transaction, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn recorded(content: &str) -> AuditEntry {
        let txn = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            content,
            TransactionType::Income,
            PaymentSource::Bank,
            Money::from_units(1_000),
        );
        AuditEntry::create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.content.clone()),
            &txn,
        )
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger.log(&recorded("Salary")).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_name.as_deref(), Some("Salary"));
    }

    #[test]
    fn test_read_recent_keeps_newest() {
        let (logger, _temp) = create_test_logger();
        for i in 0..10 {
            logger.log(&recorded(&format!("entry {}", i))).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let names: Vec<_> = recent
            .iter()
            .filter_map(|e| e.entity_name.as_deref())
            .collect();
        assert_eq!(names, ["entry 7", "entry 8", "entry 9"]);
        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let (logger, _temp) = create_test_logger();
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_one_json_object_per_line() {
        let (logger, temp) = create_test_logger();
        logger.log(&recorded("a")).unwrap();
        logger.log(&recorded("b")).unwrap();

        let raw = std::fs::read_to_string(temp.path().join("audit.log")).unwrap();
        let lines: Vec<_> = raw.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
    }

    #[test]
    fn test_garbled_line_names_file_and_line() {
        let (logger, temp) = create_test_logger();
        logger.log(&recorded("a")).unwrap();
        let path = temp.path().join("audit.log");
        let mut raw = std::fs::read_to_string(&path).unwrap();
        raw.push_str("{oops\n");
        std::fs::write(&path, raw).unwrap();

        let err = logger.read_all().unwrap_err().to_string();
        assert!(err.contains("audit.log line 2"));
    }
}
