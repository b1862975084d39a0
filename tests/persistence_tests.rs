use cashflow_cli::config::paths::CashflowPaths;
use cashflow_cli::models::{Money, NewTransaction, PaymentSource, Settings, TransactionType};
use cashflow_cli::reports::compute_stats;
use cashflow_cli::services::{SettingsService, SettingsUpdate, TransactionService};
use cashflow_cli::storage::Storage;
use chrono::NaiveDate;
use tempfile::TempDir;

fn open(dir: &TempDir) -> Storage {
    let paths = CashflowPaths::with_base_dir(dir.path().to_path_buf());
    let mut storage = Storage::new(paths).unwrap();
    storage.load_all().unwrap();
    storage
}

fn input(day: u32, content: &str, kind: TransactionType, source: PaymentSource, amount: i64) -> NewTransaction {
    NewTransaction {
        date: NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
        content: content.to_string(),
        kind,
        source,
        amount: Money::from_units(amount),
    }
}

#[test]
fn reload_preserves_order_and_fields() {
    let dir = TempDir::new().unwrap();
    let before = {
        let storage = open(&dir);
        let service = TransactionService::new(&storage);
        service
            .add(input(1, "Rent", TransactionType::Expense, PaymentSource::Bank, 4_000_000))
            .unwrap();
        service
            .add(input(3, "Bánh mì", TransactionType::Expense, PaymentSource::Cash, 20_000))
            .unwrap();
        service
            .add(input(2, "Salary", TransactionType::Income, PaymentSource::Bank, 15_000_000))
            .unwrap();
        service.all().unwrap()
    };

    let storage = open(&dir);
    let after = TransactionService::new(&storage).all().unwrap();

    assert_eq!(before, after);
    assert_eq!(after[0].content, "Salary");
    assert_eq!(after[2].content, "Rent");
}

#[test]
fn settings_and_stats_survive_restart() {
    let dir = TempDir::new().unwrap();
    {
        let storage = open(&dir);
        SettingsService::new(&storage)
            .update(SettingsUpdate {
                initial_cash: Some(Money::from_units(100)),
                initial_bank: Some(Money::from_units(50)),
                daily_cost: Some(Money::from_units(10)),
            })
            .unwrap();
        TransactionService::new(&storage)
            .add(input(5, "Lunch", TransactionType::Expense, PaymentSource::Cash, 30))
            .unwrap();
    }

    let storage = open(&dir);
    let settings = storage.settings.get().unwrap();
    assert_eq!(
        settings,
        Settings::new(
            Money::from_units(100),
            Money::from_units(50),
            Money::from_units(10)
        )
    );

    let stats = compute_stats(&storage.transactions.get_all().unwrap(), &settings);
    assert_eq!(stats.current_cash.units(), 70);
    assert_eq!(stats.current_bank.units(), 50);
    assert_eq!(stats.survival_days, 12);
}
