//! Transaction model
//!
//! A single dated cash movement: income or expense, paid from cash on hand or
//! from the bank account.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Where the funds moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentSource {
    #[default]
    Cash,
    Bank,
}

impl fmt::Display for PaymentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Bank => write!(f, "Bank"),
        }
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned at creation
    pub id: TransactionId,

    /// Calendar date
    pub date: NaiveDate,

    /// Free-text description
    pub content: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Cash or bank
    pub source: PaymentSource,

    /// Non-negative amount
    pub amount: Money,
}

impl Transaction {
    /// Create a transaction with a fresh id
    pub fn new(
        date: NaiveDate,
        content: impl Into<String>,
        kind: TransactionType,
        source: PaymentSource,
        amount: Money,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            content: content.into(),
            kind,
            source,
            amount,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.content,
            self.signed_amount(),
            self.source
        )
    }
}

/// User input for a new transaction, before an id is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub content: String,
    pub kind: TransactionType,
    pub source: PaymentSource,
    pub amount: Money,
}

impl NewTransaction {
    /// Whether the entry may be recorded: non-blank content and a positive amount
    pub fn is_acceptable(&self) -> bool {
        !self.content.trim().is_empty() && self.amount.is_positive()
    }

    /// Assign an id and produce the stored transaction
    pub fn into_transaction(self) -> Transaction {
        Transaction::new(self.date, self.content, self.kind, self.source, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    fn input(content: &str, amount: i64) -> NewTransaction {
        NewTransaction {
            date: date(),
            content: content.to_string(),
            kind: TransactionType::Expense,
            source: PaymentSource::Cash,
            amount: Money::from_units(amount),
        }
    }

    #[test]
    fn test_signed_amount() {
        let income = Transaction::new(
            date(),
            "Salary",
            TransactionType::Income,
            PaymentSource::Bank,
            Money::from_units(1000),
        );
        let expense = Transaction::new(
            date(),
            "Lunch",
            TransactionType::Expense,
            PaymentSource::Cash,
            Money::from_units(1000),
        );

        assert_eq!(income.signed_amount().units(), 1000);
        assert_eq!(expense.signed_amount().units(), -1000);
        assert!(income.is_income());
        assert!(expense.is_expense());
    }

    #[test]
    fn test_acceptance_rules() {
        assert!(input("Lunch", 50_000).is_acceptable());
        assert!(!input("", 50_000).is_acceptable());
        assert!(!input("   ", 50_000).is_acceptable());
        assert!(!input("Lunch", 0).is_acceptable());
        assert!(!input("Lunch", -10).is_acceptable());
    }

    #[test]
    fn test_wire_format() {
        let txn = input("Lunch", 50_000).into_transaction();
        let value = serde_json::to_value(&txn).unwrap();

        assert_eq!(value["date"], "2024-01-05");
        assert_eq!(value["content"], "Lunch");
        assert_eq!(value["type"], "expense");
        assert_eq!(value["source"], "cash");
        assert_eq!(value["amount"], 50_000);
        assert!(value["id"].is_string());
    }

    #[test]
    fn test_display() {
        let txn = input("Lunch", 50_000).into_transaction();
        assert_eq!(format!("{}", txn), "2024-01-05 Lunch -50,000 (Cash)");
    }
}
