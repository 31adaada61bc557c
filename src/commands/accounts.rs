// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Account;
use crate::seed;
use crate::store::Store;
use crate::utils::{
    fmt_amount, maybe_print_json, parse_account_type, parse_color, parse_decimal, pretty_table,
};
use anyhow::Result;
use serde::Serialize;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.delete_account(id);
            println!("Removed account '{}' and its transactions", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let r#type = parse_account_type(sub.get_one::<String>("type").unwrap())?;
    let balance = parse_decimal(sub.get_one::<String>("balance").unwrap())?;
    let color = parse_color(sub.get_one::<String>("color").unwrap())?;
    let id = sub
        .get_one::<String>("id")
        .cloned()
        .unwrap_or_else(|| seed::new_id("acc"));

    store.add_account(Account {
        id: id.clone(),
        name: name.clone(),
        balance,
        r#type,
        color,
    })?;
    println!(
        "Added account '{}' ({}, opening balance {})",
        name,
        r#type.as_str(),
        fmt_amount(&balance)
    );
    Ok(())
}

#[derive(Serialize)]
pub struct AccountRow {
    pub id: String,
    pub name: String,
    pub r#type: String,
    pub balance: String,
    pub color: String,
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data: Vec<AccountRow> = store
        .accounts()
        .iter()
        .map(|a| AccountRow {
            id: a.id.clone(),
            name: a.name.clone(),
            r#type: a.r#type.as_str().to_string(),
            balance: fmt_amount(&a.balance),
            color: a.color.as_str().to_string(),
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.name.clone(),
                    r.r#type.clone(),
                    r.balance.clone(),
                    r.color.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Name", "Type", "Balance", "Color"], rows)
        );
    }
    Ok(())
}
