//! Daily trend report
//!
//! Income and expense totals per calendar date, for the dates with activity.

use chrono::NaiveDate;

use crate::display::report::{format_bar, separator};
use crate::models::{Money, Transaction, TransactionType};

/// Number of activity dates shown on the dashboard
pub const DEFAULT_TREND_DAYS: usize = 10;

/// Totals for one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub income: Money,
    pub expense: Money,
}

/// Daily trend report
#[derive(Debug, Clone, Default)]
pub struct TrendReport {
    /// Points in ascending date order
    pub points: Vec<TrendPoint>,
}

impl TrendReport {
    /// Group transactions per date and keep the last `limit` dates with activity
    pub fn generate(transactions: &[Transaction], limit: usize) -> Self {
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();
        sorted.sort_by_key(|t| t.date);

        let mut points: Vec<TrendPoint> = Vec::new();
        for txn in sorted {
            // Sorted input, so equal dates are adjacent
            if points.last().map_or(true, |p| p.date != txn.date) {
                points.push(TrendPoint {
                    date: txn.date,
                    income: Money::zero(),
                    expense: Money::zero(),
                });
            }

            if let Some(point) = points.last_mut() {
                match txn.kind {
                    TransactionType::Income => point.income += txn.amount,
                    TransactionType::Expense => point.expense += txn.amount,
                }
            }
        }

        let skip = points.len().saturating_sub(limit);
        points.drain(..skip);

        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest single-day income or expense, used to scale the bars
    fn peak(&self) -> Money {
        self.points
            .iter()
            .map(|p| p.income.max(p.expense))
            .max()
            .unwrap_or_default()
    }

    /// Format the report as paired income/expense bars
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Daily Trend\n");
        output.push_str(&separator(60));
        output.push('\n');

        if self.points.is_empty() {
            output.push_str("No activity yet.\n");
            return output;
        }

        let peak = self.peak().units() as f64;
        for point in &self.points {
            output.push_str(&format!(
                "{:<11} + {:<20} {:>15}\n",
                point.date.format("%-d/%-m/%Y").to_string(),
                format_bar(point.income.units() as f64, peak, 20),
                point.income.to_string()
            ));
            output.push_str(&format!(
                "{:<11} - {:<20} {:>15}\n",
                "",
                format_bar(point.expense.units() as f64, peak, 20),
                point.expense.to_string()
            ));
        }

        output
    }
}
