// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

// Reference data is immutable after load, so listing is all there is.
pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let data: Vec<CategoryRow> = store
                .categories()
                .iter()
                .map(|c| CategoryRow {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    icon: c.icon.clone(),
                    color: c.color.as_str().to_string(),
                })
                .collect();
            if !maybe_print_json(json_flag, jsonl_flag, &data)? {
                let rows: Vec<Vec<String>> = data
                    .iter()
                    .map(|r| {
                        vec![r.id.clone(), r.name.clone(), r.icon.clone(), r.color.clone()]
                    })
                    .collect();
                println!("{}", pretty_table(&["ID", "Name", "Icon", "Color"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}
