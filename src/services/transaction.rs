//! Transaction service
//!
//! Business logic for recording and deleting transactions. Every mutation is
//! followed by a full save of the list and an audit entry.

use crate::audit::EntityType;
use crate::error::{CashflowError, CashflowResult};
use crate::models::{NewTransaction, Transaction, TransactionId};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction at the front of the list
    ///
    /// Input with blank content or a non-positive amount is not recorded and
    /// yields `Ok(None)`; no error is raised for it.
    pub fn add(&self, input: NewTransaction) -> CashflowResult<Option<Transaction>> {
        if !input.is_acceptable() {
            return Ok(None);
        }

        let txn = input.into_transaction();
        self.storage.transactions.insert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.content.clone()),
            &txn,
        )?;

        Ok(Some(txn))
    }

    /// Delete a transaction by id
    ///
    /// Returns the removed transaction, or `None` when the id is not present.
    /// Deleting an absent id leaves the store (and its file) untouched.
    pub fn delete(&self, id: TransactionId) -> CashflowResult<Option<Transaction>> {
        let Some(txn) = self.storage.transactions.delete(id)? else {
            return Ok(None);
        };

        self.storage.transactions.save()?;
        self.storage.log_delete(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.content.clone()),
            &txn,
        )?;

        Ok(Some(txn))
    }

    /// Resolve a user-supplied identifier (full UUID or short form) to an id
    ///
    /// An identifier matching several transactions is rejected so that a
    /// delete never removes more than one record.
    pub fn resolve(&self, identifier: &str) -> CashflowResult<Option<TransactionId>> {
        let matches = self.storage.transactions.find(identifier)?;
        match matches.as_slice() {
            [] => Ok(None),
            [txn] => Ok(Some(txn.id)),
            _ => Err(CashflowError::Validation(format!(
                "Identifier '{}' matches {} transactions; use the full id",
                identifier,
                matches.len()
            ))),
        }
    }

    /// List transactions newest first
    pub fn list(&self, limit: Option<usize>) -> CashflowResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.get_all()?;
        if let Some(limit) = limit {
            transactions.truncate(limit);
        }
        Ok(transactions)
    }

    /// All transactions in display order (newest first)
    pub fn all(&self) -> CashflowResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// All transactions in the order they were recorded (oldest first)
    pub fn recorded_order(&self) -> CashflowResult<Vec<Transaction>> {
        self.storage.transactions.get_in_recorded_order()
    }

    pub fn count(&self) -> CashflowResult<usize> {
        self.storage.transactions.count()
    }
}
