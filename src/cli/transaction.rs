//! Transaction CLI commands
//!
//! Recording, listing and deleting transactions.

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};

use crate::display::transaction::{format_transaction_list, format_transaction_short};
use crate::error::{CashflowError, CashflowResult};
use crate::models::{Money, NewTransaction, PaymentSource, TransactionType};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Transaction direction argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    Income,
    Expense,
}

impl From<TypeArg> for TransactionType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Income => TransactionType::Income,
            TypeArg::Expense => TransactionType::Expense,
        }
    }
}

/// Payment source argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Cash,
    Bank,
}

impl From<SourceArg> for PaymentSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Cash => PaymentSource::Cash,
            SourceArg::Bank => PaymentSource::Bank,
        }
    }
}

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction
    Add {
        /// What the money was for
        content: String,
        /// Amount in whole units (e.g., "50000" or "50,000")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Income or expense
        #[arg(short = 't', long = "type", value_enum, default_value = "expense")]
        kind: TypeArg,
        /// Cash or bank
        #[arg(short, long, value_enum, default_value = "cash")]
        source: SourceArg,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (full or short form)
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    cmd: TransactionCommands,
) -> CashflowResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            content,
            amount,
            kind,
            source,
            date,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                CashflowError::Validation(format!(
                    "Invalid amount format: '{}'. Use whole units like '50000'. Error: {}",
                    amount, e
                ))
            })?;

            let date = match date {
                Some(date_str) => parse_date(&date_str)?,
                None => chrono::Utc::now().date_naive(),
            };

            let input = NewTransaction {
                date,
                content,
                kind: kind.into(),
                source: source.into(),
                amount,
            };

            match service.add(input)? {
                Some(txn) => {
                    println!("Recorded transaction: {}", format_transaction_short(&txn));
                    println!("  Amount: {}", txn.amount);
                }
                None => {
                    println!("Nothing recorded: content must not be blank and amount must be positive.");
                }
            }
        }

        TransactionCommands::List { limit } => {
            let transactions = service.list(limit)?;
            print!("{}", format_transaction_list(&transactions));
            println!("{} record(s)", service.count()?);
        }

        TransactionCommands::Delete { id } => {
            let Some(txn_id) = service.resolve(&id)? else {
                println!("No transaction matches '{}'. Nothing deleted.", id);
                return Ok(());
            };

            if let Some(removed) = service.delete(txn_id)? {
                println!("Deleted transaction: {}", format_transaction_short(&removed));
            }
        }
    }

    Ok(())
}

fn parse_date(date_str: &str) -> CashflowResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        CashflowError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", date_str))
    })
}
