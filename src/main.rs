use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cashflow_cli::cli::{
    handle_advisor_command, handle_export_command, handle_log_command, handle_settings_command,
    handle_stats_command, handle_transaction_command, AdvisorCommands, SettingsCommands,
    TransactionCommands,
};
use cashflow_cli::config::{paths::CashflowPaths, preferences::Preferences};
use cashflow_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "cashflow",
    version,
    about = "Personal cash-flow tracker with a financial advisor",
    long_about = "Cashflow records income and expenses from cash or bank, shows your \
                  balances and how many days your money lasts, exports statements \
                  as CSV, and asks a generative advisor for advice."
)]
struct Cli {
    /// API key for the advisor
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Opening balances and daily cost
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Show balances, survival forecast and daily trend
    Stats,

    /// Export transactions as a CSV statement
    Export {
        /// Directory to write the statement into
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    #[command(flatten)]
    Advisor(AdvisorCommands),

    /// Show recent changes from the audit log
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and preferences
    let paths = CashflowPaths::new()?;
    let preferences = Preferences::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let label = preferences.currency_label.as_str();

    match cli.command {
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&storage, cmd)?,
        Some(Commands::Settings(cmd)) => handle_settings_command(&storage, label, cmd)?,
        Some(Commands::Stats) => handle_stats_command(&storage, label)?,
        Some(Commands::Export { output }) => handle_export_command(&storage, output)?,
        Some(Commands::Advisor(cmd)) => {
            handle_advisor_command(&storage, &preferences, cli.api_key.as_deref(), cmd).await?
        }
        Some(Commands::Log { limit }) => handle_log_command(&storage, limit)?,
        Some(Commands::Config) => {
            println!("Cashflow Configuration");
            println!("======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Preferences:");
            println!("  Currency label:  {}", preferences.currency_label);
            println!("  Text model:      {}", preferences.text_model);
            println!("  Speech model:    {}", preferences.speech_model);
            println!("  Voice:           {}", preferences.voice_name);
            println!("  API base URL:    {}", preferences.api_base_url);
            println!("  Prompt context:  {} transactions", preferences.recent_context_size);
            println!(
                "  Advisor:         {}",
                if cli.api_key.is_some() { "available" } else { "no API key" }
            );
        }
        None => {
            println!("Cashflow - personal cash-flow tracker");
            println!();
            println!("Run 'cashflow --help' for usage information.");
        }
    }

    Ok(())
}
