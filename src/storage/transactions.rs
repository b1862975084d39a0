//! Transaction repository for JSON storage
//!
//! Keeps the ordered transaction list (newest first) and mirrors it to
//! `cashflow_transactions.json` as a plain JSON array.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CashflowError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for the ordered transaction list
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk, validating ids and amounts
    pub fn load(&self) -> Result<(), CashflowError> {
        let transactions: Vec<Transaction> = read_json(&self.path)?;
        validate_loaded(&transactions).map_err(|msg| {
            CashflowError::Storage(format!("Invalid data in {}: {}", self.path.display(), msg))
        })?;

        let mut data = self.data.write().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = transactions;

        Ok(())
    }

    /// Save the full list to disk
    pub fn save(&self) -> Result<(), CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*data)
    }

    /// All transactions in display order (newest first)
    pub fn get_all(&self) -> Result<Vec<Transaction>, CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// All transactions in the order they were recorded (oldest first)
    pub fn get_in_recorded_order(&self) -> Result<Vec<Transaction>, CashflowError> {
        let mut transactions = self.get_all()?;
        transactions.reverse();
        Ok(transactions)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    /// Find transactions whose id matches a user-supplied identifier
    pub fn find(&self, identifier: &str) -> Result<Vec<Transaction>, CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .iter()
            .filter(|t| t.id.matches(identifier))
            .cloned()
            .collect())
    }

    /// Insert a transaction at the front of the list
    pub fn insert(&self, txn: Transaction) -> Result<(), CashflowError> {
        let mut data = self.data.write().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if data.iter().any(|t| t.id == txn.id) {
            return Err(CashflowError::Validation(format!(
                "Transaction id already exists: {}",
                txn.id
            )));
        }

        data.insert(0, txn);
        Ok(())
    }

    /// Delete a transaction, returning it if it was present
    pub fn delete(&self, id: TransactionId) -> Result<Option<Transaction>, CashflowError> {
        let mut data = self.data.write().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.iter().position(|t| t.id == id) {
            Some(index) => Ok(Some(data.remove(index))),
            None => Ok(None),
        }
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, CashflowError> {
        let data = self.data.read().map_err(|e| {
            CashflowError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

fn validate_loaded(transactions: &[Transaction]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(transactions.len());
    for txn in transactions {
        if !seen.insert(txn.id) {
            return Err(format!("duplicate transaction id {}", txn.id));
        }
        if txn.amount.is_negative() {
            return Err(format!("negative amount on transaction {}", txn.id));
        }
    }
    Ok(())
}
