// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{Account, AccountType, Category, ColorTag, Direction, Transaction};

fn cat(id: &str, name: &str, icon: &str, color: ColorTag) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color,
    }
}

/// The built-in category reference list. Ids are stable; transactions keep
/// referring to them across snapshots.
pub fn categories() -> Vec<Category> {
    vec![
        cat("1", "Dining", "🍔", ColorTag::Orange),
        cat("2", "Transport", "🚗", ColorTag::Blue),
        cat("3", "Salary", "💰", ColorTag::Emerald),
        cat("4", "Household", "🏠", ColorTag::Purple),
        cat("5", "Entertainment", "🎮", ColorTag::Pink),
        cat("6", "Health", "🏥", ColorTag::Red),
        cat("7", "Investment returns", "📈", ColorTag::Indigo),
        cat("8", "Other spending", "📦", ColorTag::Slate),
    ]
}

/// Demo-mode accounts. Balances already reflect the seeded history below.
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account {
            id: "acc-1".to_string(),
            name: "Everyday Savings".to_string(),
            balance: Decimal::from(50_000),
            r#type: AccountType::Savings,
            color: ColorTag::Green,
        },
        Account {
            id: "acc-2".to_string(),
            name: "Platinum Card".to_string(),
            balance: Decimal::from(-2_500),
            r#type: AccountType::Credit,
            color: ColorTag::Red,
        },
    ]
}

fn seed_tx(
    id: &str,
    account_id: &str,
    amount: i64,
    direction: Direction,
    category_id: &str,
    note: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        account_id: account_id.to_string(),
        amount: Decimal::from(amount),
        direction,
        category_id: category_id.to_string(),
        date: Utc::now(),
        note: note.to_string(),
    }
}

/// Demo-mode transaction history, newest-first like the live collection.
pub fn demo_transactions() -> Vec<Transaction> {
    vec![
        seed_tx("t-1", "acc-1", 120, Direction::Expense, "1", "Lunch box"),
        seed_tx("t-2", "acc-1", 45_000, Direction::Income, "3", "January salary"),
        seed_tx("t-3", "acc-2", 35, Direction::Expense, "2", "Metro fare"),
    ]
}

/// Fresh unique id for accounts and transactions created at the CLI.
pub fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}
