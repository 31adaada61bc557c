// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use crate::models::{AccountType, ColorTag, Direction};
use crate::store::Store;

const UA: &str = concat!("financepro/", env!("CARGO_PKG_VERSION"));

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// Parses a YYYY-MM-DD argument into the start of that day, UTC.
pub fn parse_date(s: &str) -> Result<DateTime<Utc>> {
    let day = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))?;
    let at_midnight = day
        .and_hms_opt(0, 0, 0)
        .with_context(|| format!("Invalid date '{}'", s))?;
    Ok(at_midnight.and_utc())
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_direction(s: &str) -> Result<Direction> {
    match s.to_lowercase().as_str() {
        "income" => Ok(Direction::Income),
        "expense" => Ok(Direction::Expense),
        other => anyhow::bail!("Invalid direction '{}', expected income|expense", other),
    }
}

pub fn parse_account_type(s: &str) -> Result<AccountType> {
    match s.to_lowercase().as_str() {
        "savings" => Ok(AccountType::Savings),
        "credit" => Ok(AccountType::Credit),
        "cash" => Ok(AccountType::Cash),
        "investment" => Ok(AccountType::Investment),
        other => anyhow::bail!(
            "Invalid account type '{}', expected savings|credit|cash|investment",
            other
        ),
    }
}

pub fn parse_color(s: &str) -> Result<ColorTag> {
    match s.to_lowercase().as_str() {
        "orange" => Ok(ColorTag::Orange),
        "blue" => Ok(ColorTag::Blue),
        "emerald" => Ok(ColorTag::Emerald),
        "purple" => Ok(ColorTag::Purple),
        "pink" => Ok(ColorTag::Pink),
        "red" => Ok(ColorTag::Red),
        "indigo" => Ok(ColorTag::Indigo),
        "slate" => Ok(ColorTag::Slate),
        "green" => Ok(ColorTag::Green),
        other => anyhow::bail!("Invalid color '{}'", other),
    }
}

pub fn fmt_amount(d: &Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Display name for a transaction's category; the reference list may not
/// contain the id.
pub fn category_label(store: &Store, category_id: &str) -> String {
    store
        .category(category_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Uncategorized".to_string())
}

pub fn category_icon(store: &Store, category_id: &str) -> String {
    store
        .category(category_id)
        .map(|c| c.icon.clone())
        .unwrap_or_else(|| "❓".to_string())
}

pub fn account_label(store: &Store, account_id: &str) -> String {
    store
        .account(account_id)
        .map(|a| a.name.clone())
        .unwrap_or_else(|| account_id.to_string())
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
