// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a transaction; determines the sign of its effect on the
/// owning account's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Income,
    Expense,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Savings,
    Credit,
    Cash,
    Investment,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Savings => "savings",
            Self::Credit => "credit",
            Self::Cash => "cash",
            Self::Investment => "investment",
        }
    }
}

/// Color tag for accounts and categories. Display attributes live in the
/// lookup below, not in the domain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Orange,
    Blue,
    Emerald,
    Purple,
    Pink,
    Red,
    Indigo,
    Slate,
    Green,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Emerald => "emerald",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Red => "red",
            Self::Indigo => "indigo",
            Self::Slate => "slate",
            Self::Green => "green",
        }
    }

    /// Hex value used when a tag has to be rendered as a chart color.
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Orange => "#f97316",
            Self::Blue => "#3b82f6",
            Self::Emerald => "#10b981",
            Self::Purple => "#a855f7",
            Self::Pink => "#ec4899",
            Self::Red => "#ef4444",
            Self::Indigo => "#6366f1",
            Self::Slate => "#64748b",
            Self::Green => "#16a34a",
        }
    }
}

/// Static reference data; immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: ColorTag,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub balance: Decimal,
    pub r#type: AccountType,
    pub color: ColorTag,
}

/// A posted income or expense event. The amount is always a non-negative
/// magnitude; `direction` carries the sign. `category_id` is not checked
/// against the category list, so display lookups must tolerate a miss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub amount: Decimal,
    pub direction: Direction,
    pub category_id: String,
    pub date: DateTime<Utc>,
    pub note: String,
}

/// The three collections as exchanged with the persistence shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub categories: Vec<Category>,
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
}
