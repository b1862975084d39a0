//! Dashboard and audit log commands

use crate::error::CashflowResult;
use crate::reports::{compute_stats, TrendReport, DEFAULT_TREND_DAYS};
use crate::storage::Storage;

/// Print the metric cards, breakdown and daily trend
pub fn handle_stats_command(storage: &Storage, currency_label: &str) -> CashflowResult<()> {
    let transactions = storage.transactions.get_all()?;
    let settings = storage.settings.get()?;

    let stats = compute_stats(&transactions, &settings);
    print!("{}", stats.format_terminal(currency_label));
    println!();
    print!(
        "{}",
        TrendReport::generate(&transactions, DEFAULT_TREND_DAYS).format_terminal()
    );

    Ok(())
}

/// Print the most recent audit entries
pub fn handle_log_command(storage: &Storage, limit: usize) -> CashflowResult<()> {
    let entries = storage.audit().read_recent(limit)?;
    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
