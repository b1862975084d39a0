//! CLI command for the CSV statement export

use std::path::PathBuf;

use crate::error::{CashflowError, CashflowResult};
use crate::export::format_csv;
use crate::storage::Storage;

/// Export all transactions, newest first, into `output` (default: current directory)
pub fn handle_export_command(storage: &Storage, output: Option<PathBuf>) -> CashflowResult<()> {
    let transactions = storage.transactions.get_all()?;

    let document = match format_csv(&transactions) {
        Ok(document) => document,
        Err(CashflowError::NothingToExport) => {
            println!("{}", CashflowError::NothingToExport);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let dir = output.unwrap_or_else(|| PathBuf::from("."));
    // Named by the UTC calendar date
    let today = chrono::Utc::now().date_naive();
    let path = document.write_to(&dir, today)?;

    println!(
        "Exported {} transaction(s) to {}",
        transactions.len(),
        path.display()
    );

    Ok(())
}
