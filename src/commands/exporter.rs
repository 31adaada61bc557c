// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use crate::utils::{account_label, category_label, fmt_amount};
use anyhow::Result;
use serde_json::json;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    // Oldest first in the file; the live collection is newest-first.
    let rows = store.transactions().iter().rev().map(|t| {
        (
            t.date.format("%Y-%m-%d").to_string(),
            account_label(store, &t.account_id),
            t.direction.as_str().to_string(),
            category_label(store, &t.category_id),
            fmt_amount(&t.amount),
            t.note.clone(),
        )
    });

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "account", "direction", "category", "amount", "note"])?;
            for (d, a, dir, cat, amt, note) in rows {
                wtr.write_record([d, a, dir, cat, amt, note])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = rows
                .map(|(d, a, dir, cat, amt, note)| {
                    json!({
                        "date": d, "account": a, "direction": dir,
                        "category": cat, "amount": amt, "note": note
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            anyhow::bail!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
