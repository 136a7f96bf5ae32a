use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn budget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_TRACKER_DATA_DIR", dir.path());
    cmd
}

#[test]
fn seeded_summary_matches_example_data() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Total Income: $2950.00"))
        .stdout(contains("Total Expenses: $240.00"))
        .stdout(contains("Total Budgeted Amount: $900.00"))
        .stdout(contains("Remaining Balance (Income - Expenses): $2710.00"))
        .stdout(contains("Overall Spending Status: within budget"))
        .stdout(contains("No categories are over budget."));
}

#[test]
fn lowered_budget_flags_category_but_not_overall_status() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["budget", "set", "groceries", "10"])
        .assert()
        .success()
        .stdout(contains("updated"));

    let output = budget(&dir)
        .args(["summary", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(summary["total_budgeted"], 610.0);
    assert_eq!(summary["status"], "within_budget");
    assert_eq!(summary["over_budget"][0]["category"], "Groceries");
    assert_eq!(summary["over_budget"][0]["spent"], 50.0);
    assert_eq!(summary["over_budget"][0]["budgeted"], 10.0);
}

#[test]
fn duplicate_expense_category_is_rejected() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["expense", "add", "Groceries", "75", "2024-12-09"])
        .assert()
        .failure()
        .stderr(contains("Expense category already exists: Groceries"));

    budget(&dir)
        .args(["expense", "total"])
        .assert()
        .success()
        .stdout(contains("Total Expenses: $240.00"));
}

#[test]
fn deleting_expense_removes_its_budget() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["expense", "delete", "dining"])
        .assert()
        .success()
        .stdout(contains("Deleted expense 'Dining' and its budget"));

    budget(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(contains("Dining").not())
        .stdout(contains("Total budgeted: $700.00"));
}

#[test]
fn invalid_date_is_reported() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["expense", "add", "Rent", "900", "2024-02-30"])
        .assert()
        .failure()
        .stderr(contains("Please use YYYY-MM-DD"));
}

#[test]
fn history_records_changes() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["goal", "update", "vacation", "5000"])
        .assert()
        .success();

    budget(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(contains("UPDATE"))
        .stdout(contains("Vacation"));
}

#[test]
fn menu_runs_from_stdin() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .write_stdin("7\n2\n6\n7\n6\n")
        .assert()
        .success()
        .stdout(contains("Invalid choice. Please try again."))
        .stdout(contains("Total Income: $2950.00"))
        .stdout(contains("Goodbye!"));
}

#[test]
fn init_does_not_overwrite_existing_data() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["income", "delete", "gifts"])
        .assert()
        .success();

    budget(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("nothing was changed"));

    budget(&dir)
        .args(["income", "total"])
        .assert()
        .success()
        .stdout(contains("Total Income: $2850.00"));
}

#[test]
fn unwritable_audit_log_warns_but_keeps_the_change() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("audit.log")).unwrap();

    budget(&dir)
        .args(["expense", "add", "Rent", "900", "2024-12-10"])
        .assert()
        .success()
        .stdout(contains("Added expense Rent"))
        .stderr(contains("Warning: change saved but not written to the audit log"));

    budget(&dir)
        .args(["expense", "show", "rent"])
        .assert()
        .success()
        .stdout(contains("$900.00"));
}

#[test]
fn menu_survives_non_utf8_input() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .write_stdin(vec![0xff, b'\n', b'6', b'\n'])
        .assert()
        .success()
        .stdout(contains("Input is not valid text. Please try again."))
        .stdout(contains("Goodbye!"));
}
