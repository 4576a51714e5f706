use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LEDGER_CSV: &str = "date,category,description,amount\n\
                          2024-01-01,Sales,Invoice #1001,1200.00\n\
                          2024-01-02,Subscriptions,Monthly recurring,800.00\n\
                          2024-01-03,Rent,Office lease,-600.00\n";

const LEDGER_JSON: &str = r#"[
  {"date": "2024-01-01", "category": "Sales", "description": "Invoice #1001", "amount": 1200.00},
  {
    "date": "2024-01-02",
    "category": "Subscriptions",
    "description": "Monthly recurring",
    "amount": "800.00"
  },
  {"date": "2024-01-03", "category": "Rent", "description": "Office lease", "amount": -600.00}
]"#;

/// A command isolated from the user's settings and log configuration
fn finreport(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finreport").unwrap();
    cmd.env("FINREPORT_CONFIG_DIR", config_dir.path())
        .env_remove("FINREPORT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn write_input(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_markdown_to_stdout_by_default() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ledger.csv", LEDGER_CSV);

    finreport(&dir)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Financial Summary"))
        .stdout(predicate::str::contains("Total amount: **$1400.00**"))
        .stdout(predicate::str::contains("## Totals by day"));
}

#[test]
fn test_json_format_with_pretty() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ledger.json", LEDGER_JSON);

    let output = finreport(&dir)
        .args(["--format", "json", "--pretty"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_amount"], "1400.00");
    assert_eq!(value["totals_by_category"]["Rent"], "-600.00");
    assert_eq!(value["transactions"][0]["amount"], "1200.00");
}

#[test]
fn test_html_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "LEDGER.CSV", LEDGER_CSV);
    let output = dir.path().join("report.html");

    finreport(&dir)
        .args(["-f", "html", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to:"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("$2,000.00"));
    assert!(html.contains("Reporting period: Jan 01, 2024 – Jan 03, 2024"));
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    finreport(&dir)
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No such input file"));
}

#[test]
fn test_unsupported_extension_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ledger.txt", LEDGER_CSV);

    finreport(&dir)
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file type: '.txt'"));
}

#[test]
fn test_malformed_date_produces_no_report() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "ledger.csv",
        "date,category,description,amount\nnot-a-date,Sales,Invoice,10\n",
    );
    let output = dir.path().join("report.md");

    finreport(&dir)
        .arg("-o")
        .arg(&output)
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-a-date"));

    assert!(!output.exists());
}

#[test]
fn test_missing_amount_names_field() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "ledger.json",
        r#"[{"date": "2024-01-01", "amount": "5"}, {"date": "2024-01-02", "category": "Rent"}]"#,
    );

    finreport(&dir)
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Record 2: missing 'amount' field"));
}

#[test]
fn test_settings_file_changes_defaults() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ledger.csv", LEDGER_CSV);
    fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol": "€", "default_format": "data"}"#,
    )
    .unwrap();

    finreport(&dir)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"transactions\""));

    finreport(&dir)
        .args(["--format", "markdown"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total amount: **€1400.00**"));
}

#[test]
fn test_explicit_config_with_unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ledger.csv", LEDGER_CSV);
    let config = write_input(&dir, "custom.json", r#"{"default_format": "pdf"}"#);

    finreport(&dir)
        .arg("--config")
        .arg(&config)
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format 'pdf'"));
}

#[test]
fn test_time_only_date_format_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ledger.csv", LEDGER_CSV);
    let config = write_input(&dir, "custom.json", r#"{"display_date_format": "%H:%M"}"#);
    let output = dir.path().join("report.html");

    finreport(&dir)
        .arg("--config")
        .arg(&config)
        .args(["-f", "html", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("%H:%M"))
        .stderr(predicate::str::contains("panicked").not());
    assert!(!output.exists());
}

#[test]
fn test_unknown_cli_format_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ledger.csv", LEDGER_CSV);

    finreport(&dir)
        .args(["--format", "pdf"])
        .arg(&input)
        .assert()
        .failure();
}
