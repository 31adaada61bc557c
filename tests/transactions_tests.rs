// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use financepro::models::{Account, AccountType, ColorTag, Direction, Transaction};
use financepro::seed;
use financepro::store::Store;
use financepro::utils::parse_date;
use financepro::{cli, commands::transactions};
use rust_decimal::Decimal;

fn setup() -> Store {
    let mut store = Store::new(seed::categories());
    store
        .add_account(Account {
            id: "acc-1".into(),
            name: "A1".into(),
            balance: Decimal::ZERO,
            r#type: AccountType::Cash,
            color: ColorTag::Indigo,
        })
        .unwrap();
    for i in 1..=3 {
        store
            .post_transaction(Transaction {
                id: format!("t-{}", i),
                account_id: "acc-1".into(),
                amount: Decimal::from(10),
                direction: Direction::Expense,
                category_id: "1".into(),
                date: parse_date(&format!("2025-01-0{}", i)).unwrap(),
                note: "P".into(),
            })
            .unwrap();
    }
    store
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(args);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            return list_m.clone();
        }
        panic!("no list subcommand");
    }
    panic!("no tx subcommand");
}

#[test]
fn list_limit_respected() {
    let store = setup();
    let list_m = list_matches(&["financepro", "tx", "list", "--limit", "2"]);
    let rows = transactions::query_rows(&store, &list_m).unwrap();
    assert_eq!(rows.len(), 2);
    // Newest-first: the last posted transaction leads
    assert_eq!(rows[0].date, "2025-01-03");
}

#[test]
fn list_filters_by_direction() {
    let mut store = setup();
    store
        .post_transaction(Transaction {
            id: "t-4".into(),
            account_id: "acc-1".into(),
            amount: Decimal::from(500),
            direction: Direction::Income,
            category_id: "3".into(),
            date: parse_date("2025-01-04").unwrap(),
            note: "pay".into(),
        })
        .unwrap();

    let list_m = list_matches(&["financepro", "tx", "list", "--direction", "income"]);
    let rows = transactions::query_rows(&store, &list_m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].direction, "income");
    assert_eq!(rows[0].amount, "500.00");
}

#[test]
fn list_resolves_category_defensively() {
    let mut store = setup();
    store
        .post_transaction(Transaction {
            id: "t-5".into(),
            account_id: "acc-1".into(),
            amount: Decimal::from(7),
            direction: Direction::Expense,
            category_id: "gone".into(),
            date: parse_date("2025-01-05").unwrap(),
            note: String::new(),
        })
        .unwrap();

    let list_m = list_matches(&["financepro", "tx", "list", "--limit", "1"]);
    let rows = transactions::query_rows(&store, &list_m).unwrap();
    assert_eq!(rows[0].category, "Uncategorized");
}
