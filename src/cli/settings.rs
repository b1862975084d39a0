//! Settings CLI commands
//!
//! Opening balances and the daily cost used for the survival forecast.

use clap::Subcommand;

use crate::error::{CashflowError, CashflowResult};
use crate::models::{Money, Settings};
use crate::services::{SettingsService, SettingsUpdate};
use crate::storage::Storage;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the current settings
    Show,
    /// Change one or more settings
    Set {
        /// Opening cash balance
        #[arg(long, allow_hyphen_values = true)]
        cash: Option<String>,
        /// Opening bank balance
        #[arg(long, allow_hyphen_values = true)]
        bank: Option<String>,
        /// Fixed daily cost used for the survival forecast
        #[arg(long, allow_hyphen_values = true)]
        daily_cost: Option<String>,
    },
    /// Reset every setting to 0
    Reset,
}

/// Handle a settings command
pub fn handle_settings_command(
    storage: &Storage,
    currency_label: &str,
    cmd: SettingsCommands,
) -> CashflowResult<()> {
    let service = SettingsService::new(storage);

    match cmd {
        SettingsCommands::Show => {
            print!("{}", format_settings(&service.get()?, currency_label));
        }

        SettingsCommands::Set {
            cash,
            bank,
            daily_cost,
        } => {
            let update = SettingsUpdate {
                initial_cash: parse_amount("cash", cash.as_deref())?,
                initial_bank: parse_amount("bank", bank.as_deref())?,
                daily_cost: parse_amount("daily cost", daily_cost.as_deref())?,
            };

            if update.is_empty() {
                println!("No changes specified. Use --cash, --bank or --daily-cost.");
                return Ok(());
            }

            let settings = service.update(update)?;
            println!("Settings updated.");
            print!("{}", format_settings(&settings, currency_label));
        }

        SettingsCommands::Reset => {
            let settings = service.reset()?;
            println!("Settings reset.");
            print!("{}", format_settings(&settings, currency_label));
        }
    }

    Ok(())
}

fn parse_amount(field: &str, value: Option<&str>) -> CashflowResult<Option<Money>> {
    value
        .map(|v| {
            Money::parse(v).map_err(|e| {
                CashflowError::Validation(format!("Invalid {} amount '{}': {}", field, v, e))
            })
        })
        .transpose()
}

fn format_settings(settings: &Settings, currency_label: &str) -> String {
    format!(
        "  Opening cash: {}\n  Opening bank: {}\n  Daily cost:   {}\n",
        settings.initial_cash.format_with_label(currency_label),
        settings.initial_bank.format_with_label(currency_label),
        settings.daily_cost.format_with_label(currency_label)
    )
}
