// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::advice::fetch_advice;
use crate::aggregate::{
    category_breakdown, percentage_of_total, recent_transactions, sum_by_direction, total_balance,
};
use crate::config::Config;
use crate::models::Direction;
use crate::session::Mode;
use crate::store::Store;
use crate::utils::{category_icon, category_label, fmt_amount, pretty_table};
use anyhow::Result;

/// Number of transactions on the recent-activity card.
const RECENT_LIMIT: usize = 10;

pub fn handle(store: &Store, config: &Config, mode: Mode, m: &clap::ArgMatches) -> Result<()> {
    let accounts = store.accounts();
    let transactions = store.transactions();

    let total = total_balance(accounts);
    let income = sum_by_direction(transactions, Direction::Income);
    let expense = sum_by_direction(transactions, Direction::Expense);

    println!("Mode: {}", mode.label());
    println!(
        "Total balance: {} ({} active accounts)",
        fmt_amount(&total),
        accounts.len()
    );
    println!("Income: {}", fmt_amount(&income));
    println!("Expense: {}", fmt_amount(&expense));
    println!();

    let breakdown = category_breakdown(transactions, store.categories());
    if breakdown.is_empty() {
        println!("No expenses recorded yet.");
    } else {
        let rows: Vec<Vec<String>> = breakdown
            .iter()
            .map(|c| {
                vec![
                    format!("{} {}", category_icon(store, &c.id), c.name),
                    fmt_amount(&c.total),
                    format!("{}%", percentage_of_total(c.total, expense)),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }
    println!();

    let rows: Vec<Vec<String>> = recent_transactions(transactions, RECENT_LIMIT)
        .map(|t| {
            vec![
                t.date.format("%m/%d %H:%M").to_string(),
                t.direction.as_str().to_string(),
                category_label(store, &t.category_id),
                fmt_amount(&t.amount),
                t.note.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Direction", "Category", "Amount", "Note"], rows)
    );

    if m.get_flag("advice") {
        println!();
        println!("{}", fetch_advice(config, store));
    }
    Ok(())
}
