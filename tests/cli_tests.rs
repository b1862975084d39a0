use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cashflow(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cashflow").unwrap();
    cmd.env("CASHFLOW_DATA_DIR", dir.path())
        .env_remove("GEMINI_API_KEY");
    cmd
}

fn recorded_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    text.lines()
        .find_map(|line| line.strip_prefix("Recorded transaction: "))
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap()
        .to_string()
}

#[test]
fn add_then_list_shows_transaction() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["add", "Lunch", "50,000", "--date", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded transaction: txn-"));

    cashflow(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("2024-01-05"))
        .stdout(predicate::str::contains("1 record(s)"));

    assert!(dir
        .path()
        .join("data")
        .join("cashflow_transactions.json")
        .exists());
}

#[test]
fn invalid_input_is_not_recorded() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["add", "   ", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing recorded"));

    cashflow(&dir)
        .args(["add", "Refund", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing recorded"));

    cashflow(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn stats_reflect_settings_and_transactions() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["settings", "set", "--cash", "100", "--bank", "50", "--daily-cost", "10"])
        .assert()
        .success();

    cashflow(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("150 VND"))
        .stdout(predicate::str::contains("15 days"));

    cashflow(&dir)
        .args(["add", "Salary", "1000", "--type", "income", "--source", "bank"])
        .assert()
        .success();

    cashflow(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("1,050 VND"))
        .stdout(predicate::str::contains("115 days"));
}

#[test]
fn stats_survive_near_max_amounts() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["settings", "set", "--cash", "9223372036854775807", "--daily-cost", "1"])
        .assert()
        .success();

    for _ in 0..2 {
        cashflow(&dir)
            .args(["add", "Windfall", "9,223,372,036,854,775,807", "--type", "income"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Recorded transaction"));
    }

    cashflow(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("9,223,372,036,854,775,807 VND"))
        .stdout(predicate::str::contains("9223372036854775807 days"));
}

#[test]
fn delete_absent_id_is_noop() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir).args(["add", "Lunch", "50000"]).assert().success();

    cashflow(&dir)
        .args(["delete", "txn-00000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted"));

    cashflow(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 record(s)"));
}

#[test]
fn delete_removes_transaction() {
    let dir = TempDir::new().unwrap();

    let output = cashflow(&dir)
        .args(["add", "Coffee", "25000"])
        .output()
        .unwrap();
    let id = recorded_id(&output.stdout);

    cashflow(&dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction"));

    cashflow(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));

    cashflow(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("DELETE"))
        .stdout(predicate::str::contains("expense 25000 (cash)"));
}

#[test]
fn export_without_data_prints_notice() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");

    cashflow(&dir)
        .args(["export", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("No data to export!"));

    assert!(!out.exists());
}

#[test]
fn export_writes_bom_prefixed_statement() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");

    cashflow(&dir)
        .args(["add", "Lunch, with friends", "50000", "--date", "2024-01-05"])
        .assert()
        .success();

    cashflow(&dir)
        .args(["export", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sao_Ke_Tai_Chinh_"));

    let file = std::fs::read_dir(&out)
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    let expected_name = format!(
        "Sao_Ke_Tai_Chinh_{}.csv",
        chrono::Utc::now().date_naive().format("%Y-%m-%d")
    );
    assert_eq!(file.file_name().unwrap().to_str().unwrap(), expected_name);
    let bytes = std::fs::read(file).unwrap();

    assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert_eq!(
        text,
        "Date,Content,Type,Source,Amount\n5/1/2024,Lunch  with friends,Expense,Cash,50000"
    );
}

#[test]
fn advisor_requires_api_key() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["ask", "How am I doing?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("advisor is unavailable"));
}

#[test]
fn corrupt_transactions_file_fails_loudly() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("cashflow_transactions.json"), "{not json").unwrap();

    cashflow(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cashflow_transactions.json"));
}
