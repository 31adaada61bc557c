// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use financepro::aggregate::{category_breakdown, sum_by_direction, total_balance};
use financepro::models::{Account, AccountType, ColorTag, Direction, Transaction};
use financepro::seed;
use financepro::store::{LedgerError, Store};
use rust_decimal::Decimal;

fn setup() -> Store {
    let mut store = Store::new(seed::categories());
    store
        .add_account(Account {
            id: "acc-1".into(),
            name: "Everyday Savings".into(),
            balance: Decimal::from(50_000),
            r#type: AccountType::Savings,
            color: ColorTag::Green,
        })
        .unwrap();
    store
        .add_account(Account {
            id: "acc-2".into(),
            name: "Platinum Card".into(),
            balance: Decimal::from(-2_500),
            r#type: AccountType::Credit,
            color: ColorTag::Red,
        })
        .unwrap();
    store
}

fn tx(id: &str, account_id: &str, amount: i64, direction: Direction, category_id: &str) -> Transaction {
    Transaction {
        id: id.into(),
        account_id: account_id.into(),
        amount: Decimal::from(amount),
        direction,
        category_id: category_id.into(),
        date: Utc::now(),
        note: String::new(),
    }
}

#[test]
fn post_expense_adjusts_balance_and_breakdown() {
    let mut store = setup();
    store
        .post_transaction(tx("t-1", "acc-1", 120, Direction::Expense, "1"))
        .unwrap();

    assert_eq!(store.account("acc-1").unwrap().balance, Decimal::from(49_880));
    let breakdown = category_breakdown(store.transactions(), store.categories());
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].id, "1");
    assert_eq!(breakdown[0].total, Decimal::from(120));
}

#[test]
fn post_income_adjusts_balance_and_totals() {
    let mut store = setup();
    store
        .post_transaction(tx("t-1", "acc-1", 120, Direction::Expense, "1"))
        .unwrap();
    store
        .post_transaction(tx("t-2", "acc-1", 45_000, Direction::Income, "3"))
        .unwrap();

    assert_eq!(
        sum_by_direction(store.transactions(), Direction::Income),
        Decimal::from(45_000)
    );
    // 50000 - 2500 - 120 + 45000
    assert_eq!(total_balance(store.accounts()), Decimal::from(92_380));
}

#[test]
fn balance_invariant_holds_over_posting_sequences() {
    let mut store = setup();
    let opening = store.account("acc-1").unwrap().balance;
    let posts = [
        (300, Direction::Expense),
        (1_200, Direction::Income),
        (45, Direction::Expense),
        (80, Direction::Expense),
    ];
    for (i, (amount, direction)) in posts.iter().enumerate() {
        store
            .post_transaction(tx(&format!("t-{}", i), "acc-1", *amount, *direction, "8"))
            .unwrap();
    }

    let for_account: Vec<_> = store
        .transactions()
        .iter()
        .filter(|t| t.account_id == "acc-1")
        .cloned()
        .collect();
    let income = sum_by_direction(&for_account, Direction::Income);
    let expense = sum_by_direction(&for_account, Direction::Expense);
    assert_eq!(
        store.account("acc-1").unwrap().balance,
        opening + income - expense
    );
}

#[test]
fn unknown_account_is_rejected_without_mutation() {
    let mut store = setup();
    let before_accounts: Vec<Decimal> = store.accounts().iter().map(|a| a.balance).collect();

    let err = store
        .post_transaction(tx("t-x", "does-not-exist", 10, Direction::Expense, "1"))
        .unwrap_err();
    assert_eq!(err, LedgerError::UnknownAccount("does-not-exist".into()));

    // All-or-nothing: no transaction inserted, no balance touched
    assert!(store.transactions().is_empty());
    let after: Vec<Decimal> = store.accounts().iter().map(|a| a.balance).collect();
    assert_eq!(before_accounts, after);
}

#[test]
fn negative_amount_is_rejected() {
    let mut store = setup();
    let mut bad = tx("t-x", "acc-1", 0, Direction::Expense, "1");
    bad.amount = Decimal::from(-5);
    let err = store.post_transaction(bad).unwrap_err();
    assert_eq!(err, LedgerError::InvalidAmount(Decimal::from(-5)));
    assert!(store.transactions().is_empty());
    assert_eq!(store.account("acc-1").unwrap().balance, Decimal::from(50_000));
}

#[test]
fn duplicate_account_id_is_rejected() {
    let mut store = setup();
    let err = store
        .add_account(Account {
            id: "acc-1".into(),
            name: "Impostor".into(),
            balance: Decimal::ZERO,
            r#type: AccountType::Cash,
            color: ColorTag::Slate,
        })
        .unwrap_err();
    assert_eq!(err, LedgerError::DuplicateId("acc-1".into()));
    assert_eq!(store.accounts().len(), 2);
}

#[test]
fn delete_account_cascades_to_its_transactions() {
    let mut store = setup();
    store
        .post_transaction(tx("t-1", "acc-1", 120, Direction::Expense, "1"))
        .unwrap();
    store
        .post_transaction(tx("t-2", "acc-2", 35, Direction::Expense, "2"))
        .unwrap();
    store
        .post_transaction(tx("t-3", "acc-2", 60, Direction::Expense, "5"))
        .unwrap();

    store.delete_account("acc-2");

    assert!(store.account("acc-2").is_none());
    assert!(store.transactions().iter().all(|t| t.account_id != "acc-2"));
    // Unrelated account and its history untouched
    assert_eq!(store.account("acc-1").unwrap().balance, Decimal::from(49_880));
    assert_eq!(store.transactions().len(), 1);
}

#[test]
fn delete_unknown_account_is_a_noop() {
    let mut store = setup();
    store.delete_account("acc-99");
    assert_eq!(store.accounts().len(), 2);
}

#[test]
fn transactions_are_newest_first() {
    let mut store = setup();
    for i in 0..3 {
        store
            .post_transaction(tx(&format!("t-{}", i), "acc-1", 10 + i, Direction::Expense, "1"))
            .unwrap();
    }
    let ids: Vec<&str> = store.transactions().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t-2", "t-1", "t-0"]);
}

#[test]
fn demo_store_carries_seed_data() {
    let store = Store::demo();
    assert_eq!(store.accounts().len(), 2);
    assert_eq!(store.transactions().len(), 3);
    assert_eq!(store.categories().len(), 8);
    assert_eq!(total_balance(store.accounts()), Decimal::from(47_500));
}
