// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use crate::seed;
use crate::store::Store;
use crate::utils::{
    account_label, category_label, fmt_amount, maybe_print_json, parse_date, parse_decimal,
    parse_direction, pretty_table,
};
use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let account_id = sub.get_one::<String>("account").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let direction = parse_direction(sub.get_one::<String>("direction").unwrap())?;
    let category_id = sub.get_one::<String>("category").unwrap();
    let note = sub.get_one::<String>("note").unwrap();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Utc::now(),
    };

    store.post_transaction(Transaction {
        id: seed::new_id("t"),
        account_id: account_id.clone(),
        amount,
        direction,
        category_id: category_id.clone(),
        date,
        note: note.clone(),
    })?;
    println!(
        "Recorded {} {} on '{}' (balance now {})",
        direction.as_str(),
        fmt_amount(&amount),
        account_label(store, account_id),
        fmt_amount(&store.account(account_id).map(|a| a.balance).unwrap_or_default())
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.account.clone(),
                    r.direction.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Account", "Direction", "Category", "Amount", "Note"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub date: String,
    pub account: String,
    pub direction: String,
    pub category: String,
    pub amount: String,
    pub note: String,
}

/// Rows in stored (newest-first) order, filtered and bounded.
pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let account = sub.get_one::<String>("account");
    let direction = sub
        .get_one::<String>("direction")
        .map(|s| parse_direction(s))
        .transpose()?;
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    let data = store
        .transactions()
        .iter()
        .filter(|t| account.map_or(true, |a| &t.account_id == a))
        .filter(|t| direction.map_or(true, |d| t.direction == d))
        .take(limit)
        .map(|t| TransactionRow {
            date: t.date.format("%Y-%m-%d").to_string(),
            account: account_label(store, &t.account_id),
            direction: t.direction.as_str().to_string(),
            category: category_label(store, &t.category_id),
            amount: fmt_amount(&t.amount),
            note: t.note.clone(),
        })
        .collect();
    Ok(data)
}
