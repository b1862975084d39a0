//! CSV statement export
//!
//! Renders transactions as a spreadsheet-friendly statement. Content commas
//! are replaced by spaces instead of being quoted, so the output never
//! contains quoted fields.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{CashflowError, CashflowResult};
use crate::models::Transaction;

/// Fixed header row
pub const CSV_HEADER: [&str; 5] = ["Date", "Content", "Type", "Source", "Amount"];

/// UTF-8 byte-order mark prepended to the encoded document
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const FILE_PREFIX: &str = "Sao_Ke_Tai_Chinh_";

/// A formatted CSV statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    text: String,
}

impl CsvDocument {
    /// Header and rows joined by `\n`, without a BOM
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Encoded document: BOM followed by the UTF-8 text
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(UTF8_BOM.len() + self.text.len());
        bytes.extend_from_slice(UTF8_BOM);
        bytes.extend_from_slice(self.text.as_bytes());
        bytes
    }

    /// Write the encoded document into `dir` under the dated file name
    pub fn write_to(&self, dir: &Path, today: NaiveDate) -> CashflowResult<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| {
            CashflowError::Export(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let path = dir.join(export_file_name(today));
        fs::write(&path, self.to_bytes()).map_err(|e| {
            CashflowError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(path)
    }
}

/// Statement file name for the given day, e.g. `Sao_Ke_Tai_Chinh_2024-01-05.csv`
pub fn export_file_name(today: NaiveDate) -> String {
    format!("{}{}.csv", FILE_PREFIX, today.format("%Y-%m-%d"))
}

/// Format transactions as a CSV statement, rows in input order
///
/// Returns [`CashflowError::NothingToExport`] for an empty list.
pub fn format_csv(transactions: &[Transaction]) -> CashflowResult<CsvDocument> {
    if transactions.is_empty() {
        return Err(CashflowError::NothingToExport);
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for txn in transactions {
        writer.write_record([
            txn.date.format("%-d/%-m/%Y").to_string(),
            txn.content.replace(',', " "),
            txn.kind.to_string(),
            txn.source.to_string(),
            txn.amount.units().to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CashflowError::Export(e.to_string()))?;
    let mut text =
        String::from_utf8(bytes).map_err(|e| CashflowError::Export(e.to_string()))?;

    // Rows are joined, not terminated
    if text.ends_with('\n') {
        text.pop();
    }

    Ok(CsvDocument { text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PaymentSource, TransactionType};
    use tempfile::TempDir;

    fn txn(day: u32, content: &str, kind: TransactionType, source: PaymentSource, amount: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            content,
            kind,
            source,
            Money::from_units(amount),
        )
    }

    #[test]
    fn test_empty_input_signals_nothing_to_export() {
        let result = format_csv(&[]);
        assert!(matches!(result, Err(CashflowError::NothingToExport)));
    }

    #[test]
    fn test_commas_replaced_by_spaces() {
        let doc = format_csv(&[txn(
            5,
            "Lunch, with friends",
            TransactionType::Expense,
            PaymentSource::Cash,
            50_000,
        )])
        .unwrap();

        assert_eq!(
            doc.text(),
            "Date,Content,Type,Source,Amount\n5/1/2024,Lunch  with friends,Expense,Cash,50000"
        );
    }

    #[test]
    fn test_rows_keep_input_order_and_no_quoting() {
        let doc = format_csv(&[
            txn(20, "Salary \"Jan\"", TransactionType::Income, PaymentSource::Bank, 12_000_000),
            txn(3, "Cà phê", TransactionType::Expense, PaymentSource::Cash, 25_000),
        ])
        .unwrap();

        let lines: Vec<&str> = doc.text().split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "20/1/2024,Salary \"Jan\",Income,Bank,12000000");
        assert_eq!(lines[2], "3/1/2024,Cà phê,Expense,Cash,25000");
    }

    #[test]
    fn test_bytes_start_with_bom() {
        let doc = format_csv(&[txn(5, "Lunch", TransactionType::Expense, PaymentSource::Cash, 1)]).unwrap();
        let bytes = doc.to_bytes();

        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
        assert_eq!(&bytes[3..], doc.text().as_bytes());
    }

    #[test]
    fn test_file_name() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(export_file_name(today), "Sao_Ke_Tai_Chinh_2024-01-05.csv");
    }

    #[test]
    fn test_write_to_directory() {
        let temp_dir = TempDir::new().unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let doc = format_csv(&[txn(5, "Lunch", TransactionType::Expense, PaymentSource::Cash, 1)]).unwrap();

        let path = doc.write_to(&temp_dir.path().join("out"), today).unwrap();
        assert!(path.ends_with("Sao_Ke_Tai_Chinh_2024-03-09.csv"));
        assert_eq!(std::fs::read(&path).unwrap(), doc.to_bytes());
    }
}
