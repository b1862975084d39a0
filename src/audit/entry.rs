//! Audit log entries
//!
//! One entry per change to the ledger: a transaction recorded or removed, or
//! the opening settings changed. Entries keep JSON snapshots of the record so
//! `cashflow log` can describe the change without reading the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What happened to the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    fn as_str(self) -> &'static str {
        match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which part of the ledger changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Settings,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Transaction => f.write_str("Transaction"),
            EntityType::Settings => f.write_str("Settings"),
        }
    }
}

/// A single change to the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,

    /// Transaction id, or `settings`
    pub entity_id: String,

    /// Transaction content; absent for settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Snapshot before the change (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    /// Snapshot after the change (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// Changed fields as `key: before -> after`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn record(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: Option<Value>,
        after: Option<Value>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary: None,
        }
    }

    /// A transaction was recorded
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let snapshot = serde_json::to_value(entity).ok();
        Self::record(
            Operation::Create,
            entity_type,
            entity_id.into(),
            entity_name,
            None,
            snapshot,
        )
    }

    /// Settings changed from `before` to `after`
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            diff_summary,
            ..Self::record(
                Operation::Update,
                entity_type,
                entity_id.into(),
                entity_name,
                serde_json::to_value(before).ok(),
                serde_json::to_value(after).ok(),
            )
        }
    }

    /// A transaction was removed
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let snapshot = serde_json::to_value(entity).ok();
        Self::record(
            Operation::Delete,
            entity_type,
            entity_id.into(),
            entity_name,
            snapshot,
            None,
        )
    }

    /// The snapshot that best describes the record after this change
    fn snapshot(&self) -> Option<&Value> {
        self.after.as_ref().or(self.before.as_ref())
    }

    /// Short description of the money involved
    ///
    /// Transactions show `type amount (source) on date`, settings show the
    /// changed fields, or the full opening figures when nothing was diffed.
    pub fn ledger_summary(&self) -> Option<String> {
        if let Some(diff) = &self.diff_summary {
            return Some(diff.clone());
        }
        let snapshot = self.snapshot()?;
        let field = |key: &str| snapshot.get(key).map(plain);

        match self.entity_type {
            EntityType::Transaction => {
                let mut summary = format!("{} {}", field("type")?, field("amount")?);
                if let Some(source) = field("source") {
                    summary.push_str(&format!(" ({})", source));
                }
                if let Some(date) = field("date") {
                    summary.push_str(&format!(" on {}", date));
                }
                Some(summary)
            }
            EntityType::Settings => Some(format!(
                "cash {}, bank {}, daily cost {}",
                field("initialCash")?,
                field("initialBank")?,
                field("dailyCost")?
            )),
        }
    }

    /// One line for `cashflow log`, plus the money summary when known
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" \"{}\"", name));
        }

        if let Some(summary) = self.ledger_summary() {
            output.push_str(&format!("\n  {}", summary));
        }

        output
    }
}

// Strings without their JSON quotes
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PaymentSource, Settings, Transaction, TransactionType};
    use chrono::NaiveDate;
    use serde_json::json;

    fn lunch() -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Lunch",
            TransactionType::Expense,
            PaymentSource::Cash,
            Money::from_units(50_000),
        )
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_keeps_after_snapshot() {
        let txn = lunch();
        let entry = AuditEntry::create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.content.clone()),
            &txn,
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after.as_ref().unwrap()["amount"], json!(50_000));
    }

    #[test]
    fn test_delete_keeps_before_snapshot() {
        let txn = lunch();
        let entry = AuditEntry::delete(EntityType::Transaction, txn.id.to_string(), None, &txn);

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.after.is_none());
        assert_eq!(
            entry.ledger_summary().as_deref(),
            Some("expense 50000 (cash) on 2024-01-05")
        );
    }

    #[test]
    fn test_settings_update_summary_is_diff() {
        let before = Settings::default();
        let after = Settings::new(Money::from_units(100), Money::zero(), Money::zero());
        let entry = AuditEntry::update(
            EntityType::Settings,
            "settings",
            None,
            &before,
            &after,
            Some("initialCash: 0 -> 100".to_string()),
        );

        assert_eq!(entry.ledger_summary().as_deref(), Some("initialCash: 0 -> 100"));
    }

    #[test]
    fn test_settings_summary_without_diff() {
        let settings = Settings::new(
            Money::from_units(100),
            Money::from_units(50),
            Money::from_units(10),
        );
        let entry = AuditEntry::create(EntityType::Settings, "settings", None, &settings);

        assert_eq!(
            entry.ledger_summary().as_deref(),
            Some("cash 100, bank 50, daily cost 10")
        );
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(EntityType::Settings, "settings", None, &json!({}));

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"entity_type\":\"settings\""));
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.entity_type, EntityType::Settings);
        assert!(deserialized.ledger_summary().is_none());
    }

    #[test]
    fn test_human_readable_format() {
        let txn = lunch();
        let entry = AuditEntry::create(
            EntityType::Transaction,
            "txn-12345678",
            Some("Lunch".to_string()),
            &txn,
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE Transaction txn-12345678 \"Lunch\""));
        assert!(formatted.contains("\n  expense 50000 (cash) on 2024-01-05"));
    }
}
