//! Transaction display formatting

use tabled::builder::Builder;
use tabled::settings::Style;

use super::report::{format_flow_colored, truncate};
use crate::models::Transaction;

const CONTENT_WIDTH: usize = 32;

/// Format transactions as a table, in the order given
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "Date", "Content", "Source", "Amount"]);
    for txn in transactions {
        builder.push_record([
            txn.id.to_string(),
            txn.date.format("%Y-%m-%d").to_string(),
            truncate(&txn.content, CONTENT_WIDTH),
            txn.source.to_string(),
            format_flow_colored(txn.kind, txn.amount),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    format!("{}\n", table)
}

/// Format a short transaction summary (one line)
pub fn format_transaction_short(txn: &Transaction) -> String {
    format!(
        "{} {} {} ({}, {})",
        txn.id,
        txn.date.format("%Y-%m-%d"),
        txn.content,
        txn.kind,
        txn.source
    )
}
