// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use financepro::models::{Account, AccountType, ColorTag, Direction, Transaction};
use financepro::seed;
use financepro::store::Store;
use financepro::utils::parse_date;
use financepro::{cli, commands::exporter};
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::tempdir;

fn base_store() -> Store {
    let mut store = Store::new(seed::categories());
    store
        .add_account(Account {
            id: "acc-1".into(),
            name: "Checking".into(),
            balance: Decimal::from(100),
            r#type: AccountType::Cash,
            color: ColorTag::Blue,
        })
        .unwrap();
    store
        .post_transaction(Transaction {
            id: "t-1".into(),
            account_id: "acc-1".into(),
            amount: "12.34".parse().unwrap(),
            direction: Direction::Expense,
            category_id: "1".into(),
            date: parse_date("2025-01-02").unwrap(),
            note: "Weekly run".into(),
        })
        .unwrap();
    store
}

fn export_matches(args: &[&str]) -> clap::ArgMatches {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(args);
    if let Some(("export", export_m)) = matches.subcommand() {
        return export_m.clone();
    }
    panic!("no export subcommand");
}

#[test]
fn export_transactions_writes_pretty_json() {
    let store = base_store();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&[
        "financepro",
        "export",
        "transactions",
        "--format",
        "json",
        "--out",
        &out_str,
    ]);
    exporter::handle(&store, &export_m).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "date": "2025-01-02",
                "account": "Checking",
                "direction": "expense",
                "category": "Dining",
                "amount": "12.34",
                "note": "Weekly run"
            }
        ])
    );
}

#[test]
fn export_transactions_writes_csv_oldest_first() {
    let mut store = base_store();
    store
        .post_transaction(Transaction {
            id: "t-2".into(),
            account_id: "acc-1".into(),
            amount: Decimal::from(5),
            direction: Direction::Income,
            category_id: "3".into(),
            date: parse_date("2025-01-03").unwrap(),
            note: "Refund".into(),
        })
        .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&[
        "financepro",
        "export",
        "transactions",
        "--format",
        "csv",
        "--out",
        &out_str,
    ]);
    exporter::handle(&store, &export_m).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "date,account,direction,category,amount,note");
    assert!(lines[1].starts_with("2025-01-02"));
    assert!(lines[2].starts_with("2025-01-03"));
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let store = base_store();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&[
        "financepro",
        "export",
        "transactions",
        "--format",
        "xml",
        "--out",
        &out_str,
    ]);
    assert!(exporter::handle(&store, &export_m).is_err());
    assert!(!out_path.exists());
}
