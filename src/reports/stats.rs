//! Financial statistics
//!
//! Derives the current balances, totals and survival forecast from the
//! transaction list and the opening settings. Nothing here is stored; the
//! figures are recomputed on every read.

use serde::Serialize;

use crate::display::report::{format_bar, format_percentage, separator};
use crate::models::{Money, PaymentSource, Settings, Transaction, TransactionType};

/// Derived financial metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStats {
    /// Opening cash plus cash income minus cash expenses
    pub current_cash: Money,
    /// Opening bank balance plus bank income minus bank expenses
    pub current_bank: Money,
    /// `current_cash + current_bank`
    pub total: Money,
    /// Whole days the total lasts at the daily cost; 0 without a daily cost
    pub survival_days: i64,
    /// Income across both sources
    pub total_income: Money,
    /// Expenses across both sources
    pub total_expense: Money,
}

impl FinancialStats {
    /// Compute the statistics for a transaction list
    ///
    /// Order of `transactions` does not matter.
    pub fn compute(transactions: &[Transaction], settings: &Settings) -> Self {
        let sum = |kind: TransactionType, source: Option<PaymentSource>| -> Money {
            transactions
                .iter()
                .filter(|t| t.kind == kind && source.map_or(true, |s| t.source == s))
                .map(|t| t.amount)
                .sum()
        };

        let current_cash = settings.initial_cash
            + sum(TransactionType::Income, Some(PaymentSource::Cash))
            - sum(TransactionType::Expense, Some(PaymentSource::Cash));
        let current_bank = settings.initial_bank
            + sum(TransactionType::Income, Some(PaymentSource::Bank))
            - sum(TransactionType::Expense, Some(PaymentSource::Bank));
        let total = current_cash + current_bank;

        let survival_days = if settings.has_forecast() {
            // Floor division, so a negative total forecasts negative days
            total.units().div_euclid(settings.daily_cost.units())
        } else {
            0
        };

        Self {
            current_cash,
            current_bank,
            total,
            survival_days,
            total_income: sum(TransactionType::Income, None),
            total_expense: sum(TransactionType::Expense, None),
        }
    }

    /// Net change since the opening balances
    pub fn net_flow(&self) -> Money {
        self.total_income - self.total_expense
    }

    /// Income as a percentage of all recorded volume (income + expense)
    pub fn income_share(&self) -> f64 {
        let volume = self.volume();
        if volume == 0.0 {
            0.0
        } else {
            self.total_income.units() as f64 * 100.0 / volume
        }
    }

    /// Expenses as a percentage of all recorded volume (income + expense)
    pub fn expense_share(&self) -> f64 {
        if self.volume() == 0.0 {
            0.0
        } else {
            100.0 - self.income_share()
        }
    }

    // Float, since income + expense may exceed i64
    fn volume(&self) -> f64 {
        self.total_income.units() as f64 + self.total_expense.units() as f64
    }

    /// Format the metric cards and the income/expense breakdown
    pub fn format_terminal(&self, currency_label: &str) -> String {
        let mut output = String::new();

        output.push_str("Financial Overview\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        let cards = [
            ("Current cash", self.current_cash),
            ("In bank", self.current_bank),
            ("Total assets", self.total),
        ];
        for (label, amount) in cards {
            output.push_str(&format!(
                "{:<25} {:>25}\n",
                label,
                amount.format_with_label(currency_label)
            ));
        }
        output.push_str(&format!(
            "{:<25} {:>25}\n",
            "Survival forecast",
            format!("{} days", self.survival_days)
        ));

        output.push('\n');
        output.push_str("Breakdown\n");
        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>25} {:>7}  {}\n",
            "Income",
            self.total_income.format_with_label(currency_label),
            format_percentage(self.income_share()),
            format_bar(self.income_share(), 100.0, 12)
        ));
        output.push_str(&format!(
            "{:<10} {:>25} {:>7}  {}\n",
            "Expense",
            self.total_expense.format_with_label(currency_label),
            format_percentage(self.expense_share()),
            format_bar(self.expense_share(), 100.0, 12)
        ));

        output
    }
}

/// Compute the statistics for a transaction list and settings
pub fn compute_stats(transactions: &[Transaction], settings: &Settings) -> FinancialStats {
    FinancialStats::compute(transactions, settings)
}
